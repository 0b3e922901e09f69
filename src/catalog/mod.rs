pub mod resolver;
pub mod store;

pub use resolver::resolve;
pub use store::{CatalogStore, DEFAULT_DOMAIN};
