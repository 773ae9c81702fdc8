// Domain layer: hiring item model and the ports the pipeline depends on.

pub mod model;
pub mod ports;
