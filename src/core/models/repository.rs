//! Repository record model
//!
//! The subset of the hosting API's repository object that the audit reads.
//! Records are never modified locally.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::Visibility;

/// Branch name every repository is expected to use as default
pub const EXPECTED_DEFAULT_BRANCH: &str = "main";

/// Errors for listing entries that are not repository records
#[derive(Debug, Error)]
pub enum MalformedEntry {
    /// The entry is not a JSON object at all
    #[error("expected a repository object, got {0}")]
    NotAnObject(&'static str),

    /// The entry is an object but lacks required fields
    #[error("invalid repository object: {0}")]
    Invalid(String),
}

/// A repository as described by the hosting API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name, unique within the organization
    pub name: String,

    /// Whether issue tracking is enabled
    #[serde(default, deserialize_with = "truthy")]
    pub has_issues: bool,

    /// Default branch name, if the API reported one as a string
    #[serde(default, deserialize_with = "string_or_none")]
    pub default_branch: Option<String>,

    /// API resource locator, base for per-repository lookups
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url: String,

    /// Whether the repository is private
    #[serde(default, deserialize_with = "truthy")]
    pub private: bool,
}

impl RepositoryRecord {
    /// Parse one element of the organization listing
    ///
    /// Anything but an object with a string `name` is rejected. Other fields
    /// never reject the entry: booleans follow JSON truthiness and a
    /// non-string branch or URL counts as missing.
    pub fn from_entry(entry: &Value) -> Result<Self, MalformedEntry> {
        if !entry.is_object() {
            return Err(MalformedEntry::NotAnObject(json_kind(entry)));
        }
        Self::deserialize(entry).map_err(|e| MalformedEntry::Invalid(e.to_string()))
    }

    /// Visibility label derived from the `private` flag
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        Visibility::from_private_flag(self.private)
    }

    /// Whether the default branch is the expected one
    #[must_use]
    pub fn has_expected_default_branch(&self) -> bool {
        self.default_branch.as_deref() == Some(EXPECTED_DEFAULT_BRANCH)
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    })
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_none(deserializer)?.unwrap_or_default())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
