use crate::domain::model::SkillLevel;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error for {field}: {reason} (got: {value})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("no recommendations for domain '{domain}' at level '{level}', even after falling back to the default domain")]
    ResolutionError { domain: String, level: SkillLevel },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
