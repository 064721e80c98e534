use crate::domain::ports::{Console, PaymentProcessor};
use crate::utils::format::format_decimal;

/// The gateway already in production. Its `make_payment` has the capability's
/// shape, so it is used directly through a closure.
#[derive(Debug, Clone)]
pub struct LegacyPaymentGateway<C: Console> {
    console: C,
}

impl<C: Console> LegacyPaymentGateway<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn make_payment(&self, amount: f64) {
        tracing::debug!(amount, "legacy gateway make_payment");
        self.console.emit(&format!(
            "Payment of ${} processed using Legacy Payment Gateway.",
            format_decimal(amount)
        ));
    }
}

/// The gateway being integrated; its native operation is `execute_transaction`.
#[derive(Debug, Clone)]
pub struct NewPaymentGateway<C: Console> {
    console: C,
}

impl<C: Console> NewPaymentGateway<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn execute_transaction(&self, amount: f64) {
        tracing::debug!(amount, "new gateway execute_transaction");
        self.console.emit(&format!(
            "Payment of ${} processed using New Payment Gateway.",
            format_decimal(amount)
        ));
    }
}

/// Exposes `NewPaymentGateway` as a `PaymentProcessor`. The amount is passed
/// through unchanged.
#[derive(Debug, Clone)]
pub struct PaymentAdapter<C: Console> {
    gateway: NewPaymentGateway<C>,
}

impl<C: Console> PaymentAdapter<C> {
    pub fn new(console: C) -> Self {
        Self {
            gateway: NewPaymentGateway::new(console),
        }
    }

    pub fn from_gateway(gateway: NewPaymentGateway<C>) -> Self {
        Self { gateway }
    }
}

impl<C: Console> PaymentProcessor for PaymentAdapter<C> {
    fn process_payment(&self, amount: f64) {
        self.gateway.execute_transaction(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::RecordingConsole;

    #[test]
    fn test_legacy_gateway_message() {
        let console = RecordingConsole::new();
        LegacyPaymentGateway::new(console.clone()).make_payment(15000.0);
        assert_eq!(
            console.lines(),
            vec!["Payment of $15000.0 processed using Legacy Payment Gateway."]
        );
    }

    #[test]
    fn test_adapter_translates_to_execute_transaction() {
        let console = RecordingConsole::new();
        let adapter = PaymentAdapter::new(console.clone());

        adapter.process_payment(23500.0);

        assert_eq!(
            console.lines(),
            vec!["Payment of $23500.0 processed using New Payment Gateway."]
        );
    }

    #[test]
    fn test_unchecked_amounts_pass_through() {
        let console = RecordingConsole::new();
        let adapter = PaymentAdapter::from_gateway(NewPaymentGateway::new(console.clone()));

        adapter.process_payment(-12.5);
        adapter.process_payment(f64::NAN);
        adapter.process_payment(f64::NEG_INFINITY);

        let lines = console.lines();
        assert_eq!(lines[0], "Payment of $-12.5 processed using New Payment Gateway.");
        assert_eq!(lines[1], "Payment of $NaN processed using New Payment Gateway.");
        assert_eq!(lines[2], "Payment of $-Infinity processed using New Payment Gateway.");
    }
}
