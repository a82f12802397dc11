//! Checklist selection
//!
//! Decides which governance checks run against each repository.

use serde::{Deserialize, Serialize};

/// Which set of checks to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Checklist {
    /// Field checks only: issues enabled, default branch is `main`
    Minimal,
    /// Field checks plus README, LICENSE, CI and test lookups
    #[default]
    Extended,
}

impl Checklist {
    /// Whether this checklist issues per-repository lookups
    #[must_use]
    pub const fn uses_lookups(self) -> bool {
        matches!(self, Self::Extended)
    }
}

impl std::fmt::Display for Checklist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimal => write!(f, "minimal"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

impl std::str::FromStr for Checklist {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "extended" => Ok(Self::Extended),
            _ => Err(format!("Invalid checklist: {s}. Use: minimal, extended")),
        }
    }
}
