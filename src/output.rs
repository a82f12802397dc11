//! Report rendering and publishing
//!
//! A report is rendered exactly once, either as human-readable text or as
//! JSON, and that single string is written both to the report file and to
//! standard output so the two can never diverge.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::core::models::{Report, RepositorySummary};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Timestamp format used on the report's last line
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Render a report for `mode`
pub fn render(report: &Report, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Human => Ok(render_text(report)),
        OutputMode::Json => render_json(report),
    }
}

/// Render the human-readable report
///
/// The output depends only on the report; the generation timestamp is the
/// last line. Lines are newline-joined and the text ends with a newline.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let stats = &report.stats;
    let mut lines = vec![
        format!("Repository validation report: {}", report.organization),
        format!("Checklist: {}", report.checklist),
        String::new(),
        "Statistics:".to_string(),
        format!("  Total repositories: {}", stats.total),
        format!("  Valid: {}", stats.valid),
        format!("  Invalid: {}", stats.invalid),
        format!("  Public: {}", stats.public),
        format!("  Private: {}", stats.private),
        String::new(),
        format!("Passing repositories ({}):", report.passing.len()),
    ];

    if report.passing.is_empty() {
        lines.push("  (none)".to_string());
    }
    for name in report.passing_names() {
        lines.push(format!("  - {name}"));
    }

    lines.push(String::new());
    lines.push(format!("Failing repositories ({}):", report.failing.len()));
    if report.failing.is_empty() {
        lines.push("  (none)".to_string());
    }
    for repo in &report.failing {
        push_failing(&mut lines, repo);
    }

    lines.push(String::new());
    lines.push(format!("Generated at: {}", report.generated_at.format(TIMESTAMP_FORMAT)));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn push_failing(lines: &mut Vec<String>, repo: &RepositorySummary) {
    lines.push(format!("  - {}", repo.name));
    for violation in &repo.violations {
        lines.push(format!("      * {violation}"));
    }
    if let (Some(ci), Some(tests)) = (repo.ci, repo.tests) {
        lines.push(format!("      Visibility: {} | CI: {ci} | Tests: {tests}", repo.visibility));
    }
}

/// Render the machine-readable report
pub fn render_json(report: &Report) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    json.push('\n');
    Ok(json)
}

/// Render once and write the result to `path` and to standard output
pub fn publish(report: &Report, mode: OutputMode, path: &Path) -> anyhow::Result<()> {
    let rendered = render(report, mode)?;
    let stdout = std::io::stdout();
    write_report(&rendered, path, &mut stdout.lock())
}

/// Write an already rendered report to `path` (overwriting it) and to `console`
pub fn write_report<W: Write>(rendered: &str, path: &Path, console: &mut W) -> anyhow::Result<()> {
    fs::write(path, rendered)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    console.write_all(rendered.as_bytes()).context("failed to write report to stdout")?;
    console.flush()?;
    Ok(())
}
