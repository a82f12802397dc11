//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the audit logic and the
//! repository hosting API. Implementations live in the `adapters` module.
//!
//! The core logic depends only on these traits, so tests can drive the
//! whole pipeline with canned answers and no network access.

mod repository_host;

pub use repository_host::{HostError, LICENSE_PATH, Listing, Page, README_PATH, RepositoryHost};
