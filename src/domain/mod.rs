// Domain layer: reading model and the ports the relay engine is generic over.

pub mod model;
pub mod ports;
