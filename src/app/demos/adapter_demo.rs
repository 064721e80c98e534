use crate::adapters::payment::{LegacyPaymentGateway, PaymentAdapter};
use crate::config::scenario::AdapterScenario;
use crate::core::payment_service::PaymentService;
use crate::core::Console;

pub fn run<C: Console + Clone>(console: &C, scenario: &AdapterScenario) {
    tracing::info!("Running adapter demo");

    // The legacy gateway already matches the capability; a closure is enough.
    let legacy_gateway = LegacyPaymentGateway::new(console.clone());
    let legacy_payment = move |amount: f64| legacy_gateway.make_payment(amount);
    let legacy_payment_service = PaymentService::new(legacy_payment);
    for &amount in &scenario.legacy_amounts {
        legacy_payment_service.pay(amount);
    }

    let new_payment = PaymentAdapter::new(console.clone());
    let new_payment_service = PaymentService::new(new_payment);
    for &amount in &scenario.adapter_amounts {
        new_payment_service.pay(amount);
    }
}
