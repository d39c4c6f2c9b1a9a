// Domain layer: the cable value object. No dependencies beyond std/serde.

pub mod model;
