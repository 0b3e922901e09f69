pub mod adapters;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use catalog::{resolve, CatalogStore, DEFAULT_DOMAIN};
pub use domain::model::{CourseEntry, DomainCatalog, SkillLevel};
pub use utils::error::{CatalogError, Result};
