use crate::domain::model::SkillLevel;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Resolve course recommendations for a career domain and skill level")]
pub struct CliConfig {
    /// Career domain to look up, e.g. "Data Scientist". Unknown domains
    /// resolve to the default recommendations.
    #[arg(required_unless_present = "list_domains")]
    pub domain: Option<String>,

    #[arg(long, value_enum, default_value_t = SkillLevel::Beginner)]
    pub level: SkillLevel,

    /// Load the catalog from a TOML file instead of the embedded data
    #[arg(long)]
    pub catalog: Option<String>,

    /// Print the resolved list as JSON
    #[arg(long)]
    pub json: bool,

    /// List all domains in the catalog and exit
    #[arg(long)]
    pub list_domains: bool,

    /// Base URL of the analytics API; when set, the visitor count is
    /// fetched (best effort) and printed after the recommendations
    #[arg(long)]
    pub api_base: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.list_domains {
            let domain = validate_required_field("domain", &self.domain)?;
            validate_non_empty_string("domain", domain)?;
        }

        if let Some(path) = &self.catalog {
            validate_non_empty_string("catalog", path)?;
        }

        if let Some(api_base) = &self.api_base {
            validate_url("api_base", api_base)?;
        }

        Ok(())
    }
}
