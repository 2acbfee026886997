// Domain layer: the order record and the ports the lookup engine talks through.

pub mod model;
pub mod ports;
