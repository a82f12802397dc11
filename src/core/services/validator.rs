//! Repository validator - applies the governance checklist to one repository
//!
//! Checks run in a fixed order and each failing check adds one violation:
//!
//! 1. issues enabled
//! 2. default branch is `main`
//! 3. `README.md` present (extended)
//! 4. `LICENSE` present (extended)
//!
//! The extended checklist also computes the CI and test labels, which are
//! informational. A lookup that fails for any reason counts as "absent";
//! validation itself never fails.

use log::warn;

use crate::core::models::{
    Checklist, CiStatus, Lookup, RepositoryRecord, TestPresence, ValidationResult, Violation,
};
use crate::core::ports::RepositoryHost;

/// Validate one repository against `checklist`
///
/// The minimal checklist makes no calls to `host`.
pub fn validate(
    record: &RepositoryRecord,
    checklist: Checklist,
    host: &dyn RepositoryHost,
) -> ValidationResult {
    let mut result = ValidationResult::new(record.visibility());
    result.violations = field_violations(record);

    if !checklist.uses_lookups() {
        return result;
    }

    let readme = host.readme_exists(&record.url);
    if !note(&mut result, record, &readme).is_found() {
        result.violations.push(Violation::MissingReadme);
    }

    let license = host.license_exists(&record.url);
    if !note(&mut result, record, &license).is_found() {
        result.violations.push(Violation::MissingLicense);
    }

    let workflows = host.workflow_count(&record.url);
    note(&mut result, record, &workflows);
    result.ci = Some(CiStatus::from_workflow_count(workflows.found()));

    let entries = host.root_entries(&record.url);
    note(&mut result, record, &entries);
    result.tests = Some(
        entries
            .found()
            .map_or(TestPresence::NotFound, |names| TestPresence::from_entry_names(names.as_slice())),
    );

    result
}

/// Violations detectable from the record's fields alone, in checklist order
#[must_use]
pub fn field_violations(record: &RepositoryRecord) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !record.has_issues {
        violations.push(Violation::IssuesDisabled);
    }
    if !record.has_expected_default_branch() {
        violations.push(Violation::DefaultBranchNotMain);
    }
    violations
}

/// Record a failed lookup on the result and hand the lookup back
fn note<'a, T>(
    result: &mut ValidationResult,
    record: &RepositoryRecord,
    lookup: &'a Lookup<T>,
) -> &'a Lookup<T> {
    if let Some(failure) = lookup.failure() {
        warn!(
            "[{}] lookup of {} failed, treating as absent: {failure}",
            record.name,
            failure.resource()
        );
        result.lookup_failures.push(failure.clone());
    }
    lookup
}
