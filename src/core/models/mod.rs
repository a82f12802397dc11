//! Domain models for repo-audit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RepositoryRecord`] - A repository as reported by the hosting API
//! - [`Checklist`] - Which checks to run
//! - [`Violation`] - A single governance-policy failure
//! - [`ValidationResult`] - Outcome for one repository
//! - [`Lookup`] - Outcome of one per-repository lookup
//! - [`Report`] - Aggregate outcome of a run

mod checklist;
mod labels;
mod lookup;
mod report;
mod repository;
mod validation;

pub use checklist::Checklist;
pub use labels::{CiStatus, TestPresence, Visibility};
pub use lookup::{Lookup, LookupFailure};
pub use report::{Report, ReportStats, RepositorySummary};
pub use repository::{EXPECTED_DEFAULT_BRANCH, MalformedEntry, RepositoryRecord};
pub use validation::{ValidationResult, Violation};
