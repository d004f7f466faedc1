// Domain layer: entities and ports. No HTTP or file system access here.

pub mod model;
pub mod ports;
