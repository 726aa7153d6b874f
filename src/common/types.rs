//! Shared enumerations used across the community data model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::CommunityError;

/// Risk classification of a strategy profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProfileRisk {
    Low,
    #[default]
    Moderate,
    High,
    Aggressive,
}

impl ProfileRisk {
    /// All members, in ascending order of risk
    pub const ALL: [ProfileRisk; 4] = [
        ProfileRisk::Low,
        ProfileRisk::Moderate,
        ProfileRisk::High,
        ProfileRisk::Aggressive,
    ];

    /// Member name as it appears in payloads
    pub fn name(&self) -> &'static str {
        match self {
            ProfileRisk::Low => "LOW",
            ProfileRisk::Moderate => "MODERATE",
            ProfileRisk::High => "HIGH",
            ProfileRisk::Aggressive => "AGGRESSIVE",
        }
    }

    /// Resolve a member by its exact (upper-case) name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|risk| risk.name() == name)
    }
}

impl std::fmt::Display for ProfileRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ProfileRisk {
    type Err = CommunityError;

    /// Strict, case-insensitive parse: unknown names are an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(&s.to_uppercase())
            .ok_or_else(|| CommunityError::invalid_value("risk", "a known risk level name"))
    }
}
