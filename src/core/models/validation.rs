//! Violations and per-repository validation results

use serde::{Serialize, Serializer};

use super::{CiStatus, LookupFailure, TestPresence, Visibility};

/// A governance-policy failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Issue tracking is disabled
    IssuesDisabled,
    /// The default branch is not `main`
    DefaultBranchNotMain,
    /// No `README.md` at the repository root
    MissingReadme,
    /// No `LICENSE` at the repository root
    MissingLicense,
}

impl Violation {
    /// The fixed message reported for this violation
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IssuesDisabled => "Issues desabilitadas",
            Self::DefaultBranchNotMain => "Branch principal não é 'main'",
            Self::MissingReadme => "README.md não encontrado",
            Self::MissingLicense => "LICENSE não encontrado",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Outcome of validating one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Violations in checklist order
    pub violations: Vec<Violation>,
    /// Visibility label
    pub visibility: Visibility,
    /// CI label, only computed by the extended checklist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci: Option<CiStatus>,
    /// Test label, only computed by the extended checklist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<TestPresence>,
    /// Lookups that were counted as "absent" without a confirmed 404
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lookup_failures: Vec<LookupFailure>,
}

impl ValidationResult {
    /// Start a result with no violations and no extended labels
    #[must_use]
    pub const fn new(visibility: Visibility) -> Self {
        Self {
            violations: Vec::new(),
            visibility,
            ci: None,
            tests: None,
            lookup_failures: Vec::new(),
        }
    }

    /// Whether the repository satisfies every check
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Messages of all violations, in checklist order
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.message()).collect()
    }
}
