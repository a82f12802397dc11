//! Informational labels attached to a repository
//!
//! Labels describe a repository without ever counting as a violation.

use serde::{Deserialize, Serialize};

/// Repository visibility, derived from the `private` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Anyone can see the repository
    Public,
    /// Only organization members can see the repository
    Private,
}

impl Visibility {
    /// Derive the label from the API's `private` flag
    #[must_use]
    pub const fn from_private_flag(private: bool) -> Self {
        if private { Self::Private } else { Self::Public }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Whether the repository has CI workflows configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiStatus {
    /// At least one workflow is configured
    Active,
    /// No workflow found, or the lookup did not succeed
    #[serde(rename = "none")]
    Inactive,
}

impl CiStatus {
    /// `Active` iff a workflow count is known and positive
    #[must_use]
    pub const fn from_workflow_count(count: Option<u64>) -> Self {
        match count {
            Some(n) if n > 0 => Self::Active,
            _ => Self::Inactive,
        }
    }
}

impl std::fmt::Display for CiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "none"),
        }
    }
}

/// Whether the repository root looks like it contains tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestPresence {
    /// An entry named `tests`, or starting with `test`, exists at the root
    #[serde(rename = "found")]
    Found,
    /// No such entry, or the directory listing did not succeed
    #[serde(rename = "not found")]
    NotFound,
}

impl TestPresence {
    /// Detect tests from the names of the root entries
    ///
    /// Matching is case-insensitive: `tests`, `test_utils` and `Testing` all count.
    #[must_use]
    pub fn from_entry_names<S: AsRef<str>>(names: &[S]) -> Self {
        let found = names.iter().any(|name| {
            let lower = name.as_ref().to_lowercase();
            lower == "tests" || lower.starts_with("test")
        });
        if found { Self::Found } else { Self::NotFound }
    }
}

impl std::fmt::Display for TestPresence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found => write!(f, "found"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
