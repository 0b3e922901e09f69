use serde::{Deserialize, Serialize};
use std::fmt;

/// The three skill tiers a catalog covers. Ordering runs from least to most
/// advanced; the catalog only ever uses the level as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recommended learning resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub title: String,
    pub platform: String,
    pub duration: String,
    pub rating: f64,
    pub outcome: String,
    pub link: String,
}

/// All tiers authored for one career domain. A tier that was never authored
/// is absent (`None`), which is distinct from an authored-but-empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCatalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginner: Option<Vec<CourseEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<Vec<CourseEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced: Option<Vec<CourseEntry>>,
}

impl DomainCatalog {
    /// The authored tier for `level`, in curated order, if one exists.
    pub fn tier(&self, level: SkillLevel) -> Option<&[CourseEntry]> {
        match level {
            SkillLevel::Beginner => self.beginner.as_deref(),
            SkillLevel::Intermediate => self.intermediate.as_deref(),
            SkillLevel::Advanced => self.advanced.as_deref(),
        }
    }
}
