// Domain layer: the catalog data model. No dependencies beyond std/serde.

pub mod model;
