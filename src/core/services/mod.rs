//! Business logic services
//!
//! - [`lister`] - Fetch the organization's repository listing
//! - [`validator`] - Apply the checklist to one repository
//! - [`reporter`] - Fold validation results into a report
//! - [`audit`] - Run the three in sequence
//!
//! All host interaction goes through the [`RepositoryHost`](crate::core::ports::RepositoryHost) port.

pub mod audit;
pub mod lister;
pub mod reporter;
pub mod validator;

pub use audit::{AuditOutcome, run_audit};
pub use lister::{ListFailure, ListOutcome, MAX_PER_PAGE, Pagination, list_repositories};
pub use reporter::build_report;
pub use validator::{field_violations, validate};
