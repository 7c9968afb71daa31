// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/chrono where the wire shapes need them.

pub mod model;
pub mod ports;
