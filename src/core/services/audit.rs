//! Audit pipeline - lister, validator and report builder in sequence
//!
//! Repositories are processed one at a time in listing order, which is also
//! the order of the report's partitions.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::lister::{ListFailure, ListOutcome, list_repositories};
use super::reporter::build_report;
use super::validator::validate;
use crate::config::AuditConfig;
use crate::core::models::{RepositoryRecord, Report};
use crate::core::ports::RepositoryHost;

/// Result of an audit run
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    /// Every listed repository was validated
    Completed(Report),
    /// The listing failed; no report should be produced
    Aborted(ListFailure),
}

/// Run the audit for the organization named in `config`
///
/// Listing entries that are not repository records are skipped with a
/// warning and do not appear in the report or its counts.
pub fn run_audit(
    host: &dyn RepositoryHost,
    config: &AuditConfig,
    generated_at: DateTime<Utc>,
) -> AuditOutcome {
    let entries = match list_repositories(host, &config.org, &config.pagination) {
        ListOutcome::Listed(entries) => entries,
        ListOutcome::Failed(failure) => return AuditOutcome::Aborted(failure),
    };

    info!(
        "Auditing {} repositor(ies) of '{}' with the {} checklist",
        entries.len(),
        config.org,
        config.checklist
    );

    let mut results = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let record = match RepositoryRecord::from_entry(entry) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping listing entry #{index}: {e}");
                continue;
            },
        };

        let result = validate(&record, config.checklist, host);
        if result.passed() {
            info!("[{}] - OK", record.name);
        } else {
            info!("[{}] - {} problem(s) found", record.name, result.violations.len());
            debug!("[{}]   {}", record.name, result.messages().join("; "));
        }
        results.push((record, result));
    }

    AuditOutcome::Completed(build_report(&config.org, config.checklist, results, generated_at))
}
