//! Aggregate audit report
//!
//! A report is built once per run and never modified afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Checklist, CiStatus, LookupFailure, TestPresence, ValidationResult, Violation, Visibility};

/// Counts over all audited repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportStats {
    /// Repositories audited
    pub total: usize,
    /// Repositories without violations
    pub valid: usize,
    /// Repositories with at least one violation
    pub invalid: usize,
    /// Public repositories, regardless of outcome
    pub public: usize,
    /// Private repositories, regardless of outcome
    pub private: usize,
}

/// One repository's entry in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    /// Repository name
    pub name: String,
    /// Violations in checklist order (empty for passing repositories)
    pub violations: Vec<Violation>,
    /// Visibility label
    pub visibility: Visibility,
    /// CI label (extended checklist only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<CiStatus>,
    /// Test label (extended checklist only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<TestPresence>,
    /// Lookups that failed and were counted as absent
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lookup_failures: Vec<LookupFailure>,
}

impl RepositorySummary {
    /// Combine a repository name with its validation result
    #[must_use]
    pub fn new(name: String, result: ValidationResult) -> Self {
        Self {
            name,
            violations: result.violations,
            visibility: result.visibility,
            ci: result.ci,
            tests: result.tests,
            lookup_failures: result.lookup_failures,
        }
    }
}

/// Result of one audit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Audited organization
    pub organization: String,
    /// Checklist the repositories were validated against
    pub checklist: Checklist,
    /// Summary counts
    pub stats: ReportStats,
    /// Repositories without violations, in processing order
    pub passing: Vec<RepositorySummary>,
    /// Repositories with violations, in processing order
    pub failing: Vec<RepositorySummary>,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Names of passing repositories, in processing order
    #[must_use]
    pub fn passing_names(&self) -> Vec<&str> {
        self.passing.iter().map(|r| r.name.as_str()).collect()
    }

    /// Names of failing repositories, in processing order
    #[must_use]
    pub fn failing_names(&self) -> Vec<&str> {
        self.failing.iter().map(|r| r.name.as_str()).collect()
    }

    /// Whether every audited repository passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failing.is_empty()
    }
}
