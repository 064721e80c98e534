use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PatternError;
use crate::utils::format::format_decimal;

/// The type tag accepted by the medication factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MedicationKind {
    Tablet,
    Syrup,
    Injection,
}

impl MedicationKind {
    /// Tags in the order the factory checks them.
    pub const ALL: [MedicationKind; 3] = [
        MedicationKind::Tablet,
        MedicationKind::Syrup,
        MedicationKind::Injection,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            MedicationKind::Tablet => "TABLET",
            MedicationKind::Syrup => "SYRUP",
            MedicationKind::Injection => "INJECTION",
        }
    }

    /// Names of the fields a variant reads, in positional order.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            MedicationKind::Tablet => &["name", "dosage"],
            MedicationKind::Syrup => &["name", "flavor"],
            MedicationKind::Injection => &["name", "dosage"],
        }
    }
}

impl FromStr for MedicationKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatternError::UnknownType {
                type_tag: s.to_string(),
            })
    }
}

impl fmt::Display for MedicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Medication {
    /// Dosage in milligrams.
    Tablet { name: String, dosage: i32 },
    Syrup { name: String, flavor: String },
    /// Dosage in millilitres.
    Injection { name: String, dosage: f64 },
}

impl Medication {
    pub fn kind(&self) -> MedicationKind {
        match self {
            Medication::Tablet { .. } => MedicationKind::Tablet,
            Medication::Syrup { .. } => MedicationKind::Syrup,
            Medication::Injection { .. } => MedicationKind::Injection,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Medication::Tablet { name, .. }
            | Medication::Syrup { name, .. }
            | Medication::Injection { name, .. } => name,
        }
    }

    pub fn display_info(&self) -> String {
        match self {
            Medication::Tablet { name, dosage } => {
                format!("Tablet Medication: {}, Dosage: {}mg", name, dosage)
            }
            Medication::Syrup { name, flavor } => {
                format!("Syrup Medication: {}, Flavor: {}", name, flavor)
            }
            Medication::Injection { name, dosage } => {
                format!(
                    "Injection Medication: {}, Dosage: {}ml",
                    name,
                    format_decimal(*dosage)
                )
            }
        }
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_info())
    }
}
