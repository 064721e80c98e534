/// Renders a decimal the way the reference output does (Java's
/// `Double.toString`): plain notation with at least one fractional digit for
/// 1e-3 <= |x| < 1e7, otherwise `d.dddE±n`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Display never switches to exponent notation.
        let plain = value.to_string();
        return if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        };
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. `1.5e17`, `1e-4`.
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// `[a, b, c]`, the bracketed list used in shop notifications.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
