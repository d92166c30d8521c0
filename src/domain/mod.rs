// Domain layer: campsite model, variant-key table and ports (interfaces).

pub mod fields;
pub mod model;
pub mod ports;
