// Adapters layer: concrete implementations behind the domain ports (console sinks, payment gateways).

pub mod console;
pub mod payment;
