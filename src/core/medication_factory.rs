use crate::core::{Medication, MedicationKind};
use crate::utils::error::{PatternError, Result};

/// Builds medications from an untyped tag and positional string fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedicationFactory;

impl MedicationFactory {
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(None)` for an absent or unrecognised tag. Missing fields and
    /// unparsable numbers are errors.
    pub fn create<S: AsRef<str>>(
        &self,
        type_tag: Option<&str>,
        fields: &[S],
    ) -> Result<Option<Medication>> {
        let Some(type_tag) = type_tag else {
            tracing::debug!("no medication type given, nothing produced");
            return Ok(None);
        };

        match type_tag.parse::<MedicationKind>() {
            Ok(kind) => self.build(kind, fields).map(Some),
            Err(e) => {
                tracing::debug!("{}, nothing produced", e);
                Ok(None)
            }
        }
    }

    /// Like `create`, but an unknown tag is reported as `UnknownType`.
    pub fn create_strict<S: AsRef<str>>(&self, type_tag: &str, fields: &[S]) -> Result<Medication> {
        let kind = type_tag.parse::<MedicationKind>()?;
        self.build(kind, fields)
    }

    pub fn build<S: AsRef<str>>(&self, kind: MedicationKind, fields: &[S]) -> Result<Medication> {
        let name = field(kind, fields, 0)?.to_string();

        let medication = match kind {
            MedicationKind::Tablet => {
                let raw = field(kind, fields, 1)?;
                let dosage = raw.parse::<i32>().map_err(|e| invalid_number(kind, 1, raw, e))?;
                Medication::Tablet { name, dosage }
            }
            MedicationKind::Syrup => Medication::Syrup {
                name,
                flavor: field(kind, fields, 1)?.to_string(),
            },
            MedicationKind::Injection => {
                let raw = field(kind, fields, 1)?;
                // Surrounding whitespace is tolerated for decimals only.
                let dosage = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| invalid_number(kind, 1, raw, e))?;
                Medication::Injection { name, dosage }
            }
        };

        tracing::debug!(kind = %kind, name = medication.name(), "medication created");
        Ok(medication)
    }
}

fn field<S: AsRef<str>>(kind: MedicationKind, fields: &[S], index: usize) -> Result<&str> {
    fields
        .get(index)
        .map(|value| value.as_ref())
        .ok_or_else(|| PatternError::MissingField {
            kind: kind.tag().to_string(),
            field: kind.field_names()[index].to_string(),
            index,
        })
}

fn invalid_number(
    kind: MedicationKind,
    index: usize,
    raw: &str,
    err: impl std::fmt::Display,
) -> PatternError {
    PatternError::InvalidNumericField {
        field: kind.field_names()[index].to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    }
}
