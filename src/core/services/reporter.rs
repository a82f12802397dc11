//! Report builder - folds validation results into a report
//!
//! This is pure business logic with no I/O; rendering and writing live in
//! the `output` module.

use chrono::{DateTime, Utc};

use crate::core::models::{
    Checklist, RepositoryRecord, RepositorySummary, Report, ReportStats, ValidationResult,
    Visibility,
};

/// Build the report for one run
///
/// Repositories keep the order in which they were processed. Each one lands
/// in exactly one of the passing and failing partitions.
#[must_use]
pub fn build_report(
    organization: &str,
    checklist: Checklist,
    results: Vec<(RepositoryRecord, ValidationResult)>,
    generated_at: DateTime<Utc>,
) -> Report {
    let mut stats = ReportStats::default();
    let mut passing = Vec::new();
    let mut failing = Vec::new();

    for (record, result) in results {
        stats.total += 1;
        match record.visibility() {
            Visibility::Private => stats.private += 1,
            Visibility::Public => stats.public += 1,
        }

        if result.passed() {
            stats.valid += 1;
            passing.push(RepositorySummary::new(record.name, result));
        } else {
            stats.invalid += 1;
            failing.push(RepositorySummary::new(record.name, result));
        }
    }

    Report {
        organization: organization.to_string(),
        checklist,
        stats,
        passing,
        failing,
        generated_at,
    }
}
