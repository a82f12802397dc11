//! Audit command - list, validate, report

use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use log::{error, info, warn};

use repo_audit::adapters::GithubClient;
use repo_audit::config::{AuditConfig, Overrides};
use repo_audit::core::services::{AuditOutcome, ListFailure, run_audit};
use repo_audit::output::{self, OutputMode};

/// Audit the configured organization and publish the report
///
/// A failed or malformed listing prints a diagnostic and returns without
/// writing a report. Violations never make the command fail.
pub fn audit(
    config_path: Option<&Path>,
    overrides: Overrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let config = AuditConfig::load(config_path, overrides)?;
    let host = GithubClient::new(&config)?;

    match run_audit(&host, &config, Utc::now()) {
        AuditOutcome::Completed(report) => {
            let path = config.report_path(output_mode);
            output::publish(&report, output_mode, &path)?;
            info!(
                "Report written to {} ({} valid, {} invalid)",
                path.display(),
                report.stats.valid,
                report.stats.invalid
            );
            if !report.all_passed() {
                warn!("Failing repositories: {}", report.failing_names().join(", "));
            }
        },
        AuditOutcome::Aborted(failure) => {
            error!("Listing repositories of '{}' failed: {failure}", config.org);
            print_diagnostic(&failure);
        },
    }

    Ok(())
}

fn print_diagnostic(failure: &ListFailure) {
    match failure {
        ListFailure::Rejected { status, body } => {
            eprintln!("{} {status}", "Error accessing the API:".red().bold());
            eprintln!("{body}");
        },
        ListFailure::Unreachable(message) => {
            eprintln!("{} {message}", "Error accessing the API:".red().bold());
        },
        ListFailure::Unexpected(value) => {
            eprintln!("{}", "Error fetching repositories. Unexpected API response:".red().bold());
            eprintln!("{value}");
        },
    }
    eprintln!("{}", "No report was written.".yellow());
}
