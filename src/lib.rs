pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DemoCommand};

pub use crate::adapters::console::{RecordingConsole, StdoutConsole};
pub use crate::adapters::payment::{LegacyPaymentGateway, NewPaymentGateway, PaymentAdapter};
pub use crate::config::scenario::ScenarioConfig;
pub use crate::core::{
    medication_factory::MedicationFactory,
    payment_service::PaymentService,
    shop::{OnlineShop, ShopCustomer},
};
pub use crate::domain::model::{Medication, MedicationKind};
pub use crate::domain::ports::{Console, Customer, PaymentProcessor, Shop};
pub use crate::utils::error::{PatternError, Result};
