use crate::core::PaymentProcessor;

/// Consumer of the payment capability. It knows nothing about which gateway
/// sits behind `P`.
pub struct PaymentService<P: PaymentProcessor> {
    processor: P,
}

impl<P: PaymentProcessor> PaymentService<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn pay(&self, amount: f64) {
        tracing::debug!(amount, "forwarding payment");
        self.processor.process_payment(amount);
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }
}
