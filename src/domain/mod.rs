// Domain layer: site records, icon identifiers and the ports the rest of the crate talks through.

pub mod icon;
pub mod model;
pub mod ports;
