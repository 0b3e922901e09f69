// Adapters layer: clients for external collaborators. Nothing here is part
// of the recommendation contract.

pub mod visitor;
