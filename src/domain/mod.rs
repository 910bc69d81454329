// Domain layer: draw records and the ports (storage, config, pipeline) the core runs against.

pub mod model;
pub mod ports;
