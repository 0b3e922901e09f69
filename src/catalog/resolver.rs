use crate::catalog::store::{CatalogStore, DEFAULT_DOMAIN};
use crate::domain::model::{CourseEntry, SkillLevel};
use crate::utils::error::{CatalogError, Result};

/// Resolves `(domain, level)` to the ordered list of recommendations.
///
/// Strict two-step chain: the exact domain's tier if it exists, otherwise
/// the default domain's tier for the same level. No fuzzy matching on
/// domain names and no re-ordering of the curated sequence.
///
/// Returns `ResolutionError` only if the fallback tier is missing or empty,
/// which a validated store rules out at load time.
pub fn resolve<'a>(
    store: &'a CatalogStore,
    domain_name: &str,
    level: SkillLevel,
) -> Result<&'a [CourseEntry]> {
    match store.get_domain(domain_name) {
        Some(catalog) => {
            if let Some(tier) = catalog.tier(level) {
                tracing::debug!(
                    "Resolved '{}' at level '{}' to {} entries",
                    domain_name,
                    level,
                    tier.len()
                );
                return Ok(tier);
            }
            tracing::debug!(
                "Domain '{}' has no '{}' tier, falling back to default",
                domain_name,
                level
            );
        }
        None => {
            tracing::debug!(
                "Unknown domain '{}', falling back to default",
                domain_name
            );
        }
    }

    match store.get_domain(DEFAULT_DOMAIN).and_then(|c| c.tier(level)) {
        Some(tier) if !tier.is_empty() => Ok(tier),
        _ => Err(CatalogError::ResolutionError {
            domain: domain_name.to_string(),
            level,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DomainCatalog;
    use std::collections::HashMap;

    fn entry(title: &str) -> CourseEntry {
        CourseEntry {
            title: title.to_string(),
            platform: "Coursera".to_string(),
            duration: "10h".to_string(),
            rating: 4.5,
            outcome: "Core Concepts".to_string(),
            link: "https://www.coursera.org/".to_string(),
        }
    }

    #[test]
    fn test_exact_match_returns_tier_in_stored_order() {
        let store = CatalogStore::load().unwrap();
        let tier = resolve(&store, "Data Scientist", SkillLevel::Beginner).unwrap();

        let titles: Vec<&str> = tier.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Python for Data Science", "Intro to SQL", "Statistics 101"]
        );
    }

    #[test]
    fn test_unknown_domain_falls_back_to_default() {
        let store = CatalogStore::load().unwrap();
        let tier = resolve(&store, "Quantum Blacksmith", SkillLevel::Intermediate).unwrap();

        let titles: Vec<&str> = tier.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Practical Application"]);
    }

    #[test]
    fn test_unknown_domain_equals_default_for_every_level() {
        let store = CatalogStore::load().unwrap();
        for level in SkillLevel::ALL {
            let fallback = resolve(&store, "Underwater Basket Weaver", level).unwrap();
            let default = resolve(&store, DEFAULT_DOMAIN, level).unwrap();
            assert_eq!(fallback, default);
        }
    }

    #[test]
    fn test_known_domain_missing_level_falls_back_per_level() {
        let mut domains = HashMap::new();
        domains.insert(
            "Backend Developer".to_string(),
            DomainCatalog {
                beginner: Some(vec![entry("Node.js Basics")]),
                intermediate: None,
                advanced: None,
            },
        );
        domains.insert(
            DEFAULT_DOMAIN.to_string(),
            DomainCatalog {
                beginner: Some(vec![entry("Domain Fundamentals")]),
                intermediate: Some(vec![entry("Practical Application")]),
                advanced: Some(vec![entry("Mastery & Leadership")]),
            },
        );
        let store = CatalogStore::from_domains_unchecked(domains);

        let own = resolve(&store, "Backend Developer", SkillLevel::Beginner).unwrap();
        assert_eq!(own[0].title, "Node.js Basics");

        let fallback = resolve(&store, "Backend Developer", SkillLevel::Advanced).unwrap();
        assert_eq!(fallback[0].title, "Mastery & Leadership");
    }

    #[test]
    fn test_broken_default_invariant_surfaces_resolution_error() {
        // Only reachable when load-time validation was bypassed.
        let mut domains = HashMap::new();
        domains.insert(
            DEFAULT_DOMAIN.to_string(),
            DomainCatalog {
                beginner: Some(vec![entry("Domain Fundamentals")]),
                intermediate: Some(vec![]),
                advanced: None,
            },
        );
        let store = CatalogStore::from_domains_unchecked(domains);

        let err = resolve(&store, "Quantum Blacksmith", SkillLevel::Advanced).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ResolutionError {
                level: SkillLevel::Advanced,
                ..
            }
        ));

        // An empty default tier must not be returned silently either.
        let err = resolve(&store, "Quantum Blacksmith", SkillLevel::Intermediate).unwrap_err();
        assert!(matches!(err, CatalogError::ResolutionError { .. }));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let store = CatalogStore::load().unwrap();
        let first = resolve(&store, "Backend Developer", SkillLevel::Advanced).unwrap();
        let second = resolve(&store, "Backend Developer", SkillLevel::Advanced).unwrap();
        assert_eq!(first, second);
    }
}
