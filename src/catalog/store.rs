use crate::domain::model::{CourseEntry, DomainCatalog, SkillLevel};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Reserved fallback domain. Always present in a valid catalog, never a
/// classification target itself.
pub const DEFAULT_DOMAIN: &str = "default";

/// Catalog shipped with the crate, mirroring the curated source data.
const EMBEDDED_CATALOG: &str = include_str!("courses.toml");

/// The full career-domain → course-tier mapping, loaded and validated once
/// at startup and read-only afterwards. Lookups never mutate it, so a loaded
/// store can be shared across threads without locking.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CatalogStore {
    domains: HashMap<String, DomainCatalog>,
}

impl CatalogStore {
    /// Parses and validates the embedded catalog data.
    pub fn load() -> Result<Self> {
        let store = Self::from_toml_str(EMBEDDED_CATALOG)?;
        tracing::debug!("Loaded embedded catalog with {} domains", store.len());
        Ok(store)
    }

    /// Loads a catalog from an external TOML file instead of the embedded
    /// data. Same validation contract as `load`; meant to run once at
    /// process start, not per request.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded catalog from {} with {} domains",
            path.as_ref().display(),
            store.len()
        );
        Ok(store)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let store: CatalogStore = toml::from_str(content)?;
        store.validate()?;
        Ok(store)
    }

    /// Exact-match, case-sensitive lookup. Absence is expected and normal:
    /// the upstream classifier emits open-ended free text.
    pub fn get_domain(&self, domain_name: &str) -> Option<&DomainCatalog> {
        self.domains.get(domain_name)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Domain names present in the catalog, in no particular order.
    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn from_domains_unchecked(domains: HashMap<String, DomainCatalog>) -> Self {
        Self { domains }
    }
}

impl Validate for CatalogStore {
    fn validate(&self) -> Result<()> {
        for (domain_name, catalog) in &self.domains {
            for level in SkillLevel::ALL {
                if let Some(tier) = catalog.tier(level) {
                    for (index, entry) in tier.iter().enumerate() {
                        let context = format!("\"{}\".{}[{}]", domain_name, level, index);
                        validate_entry(&context, entry)?;
                    }
                }
            }
        }

        // The default domain is the terminal fallback: it must exist and
        // carry a non-empty tier for every level, or resolution could come
        // up empty-handed at runtime.
        let default_catalog =
            self.domains
                .get(DEFAULT_DOMAIN)
                .ok_or_else(|| CatalogError::ValidationError {
                    field: "domains".to_string(),
                    value: DEFAULT_DOMAIN.to_string(),
                    reason: "Default domain is missing from the catalog".to_string(),
                })?;

        for level in SkillLevel::ALL {
            match default_catalog.tier(level) {
                Some(tier) if !tier.is_empty() => {}
                _ => {
                    return Err(CatalogError::ValidationError {
                        field: format!("\"{}\".{}", DEFAULT_DOMAIN, level),
                        value: String::new(),
                        reason: format!(
                            "Default domain must have a non-empty '{}' tier",
                            level
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

fn validate_entry(context: &str, entry: &CourseEntry) -> Result<()> {
    validate_non_empty_string(&format!("{}.title", context), &entry.title)?;
    validate_range(&format!("{}.rating", context), entry.rating, 0.0, 5.0)?;
    validate_url(&format!("{}.link", context), &entry.link)?;
    Ok(())
}
