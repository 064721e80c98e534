// Domain layer: the medication model and the ports (capabilities) the patterns are built on.
// No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
