use std::rc::Rc;

/// Where demo output lines go.
pub trait Console {
    fn emit(&self, line: &str);
}

impl<C: Console + ?Sized> Console for &C {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

/// The single-operation payment capability `PaymentService` depends on.
///
/// Any `Fn(f64)` satisfies it, so a gateway whose method already has the right
/// shape can be plugged in as a closure; other gateways go through an adapter.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: f64);
}

impl<F> PaymentProcessor for F
where
    F: Fn(f64),
{
    fn process_payment(&self, amount: f64) {
        self(amount)
    }
}

/// Observer side of the shop.
pub trait Customer {
    fn name(&self) -> &str;

    /// Called with the full, committed product list after every change.
    fn update(&self, available_products: &[String]);
}

/// Subject side of the shop. Customers are shared handles; identity is the
/// allocation, not the name.
pub trait Shop {
    fn register(&mut self, customer: Rc<dyn Customer>);
    fn unregister(&mut self, customer: &Rc<dyn Customer>);
    fn notify_customers(&self);
}
