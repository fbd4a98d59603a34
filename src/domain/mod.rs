// Domain layer: shared models and the demo port. Pattern modules depend on this, never the reverse.

pub mod model;
pub mod ports;
