use super::OutputFormat;
use crate::config::scenario::FactoryScenario;
use crate::core::medication_factory::MedicationFactory;
use crate::core::{Console, Medication};
use crate::utils::error::Result;

/// Creates and displays every order. Orders with no recognised type are
/// reported and skipped; the first malformed order aborts the run.
pub fn run<C: Console>(
    console: &C,
    scenario: &FactoryScenario,
    format: OutputFormat,
) -> Result<Vec<Medication>> {
    tracing::info!("Running factory demo");

    let medication_factory = MedicationFactory::new();
    let mut produced = Vec::with_capacity(scenario.orders.len());

    for order in &scenario.orders {
        let type_tag = order.type_tag.as_deref();
        match medication_factory.create(type_tag, order.fields.as_slice())? {
            Some(medication) => {
                let line = match format {
                    OutputFormat::Text => medication.display_info(),
                    OutputFormat::Json => serde_json::to_string(&medication)?,
                };
                console.emit(&line);
                produced.push(medication);
            }
            None => {
                tracing::warn!("No medication produced for type {:?}", type_tag);
                console.emit(&format!(
                    "No medication produced for type: {}",
                    type_tag.unwrap_or("<none>")
                ));
            }
        }
    }

    Ok(produced)
}
