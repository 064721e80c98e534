pub mod medication_factory;
pub mod payment_service;
pub mod shop;

pub use crate::domain::model::{Medication, MedicationKind};
pub use crate::domain::ports::{Console, Customer, PaymentProcessor, Shop};
pub use crate::utils::error::Result;
