//! Repository host port
//!
//! Defines the lookups the audit needs from a repository hosting API.

use serde_json::Value;
use thiserror::Error;

use crate::core::models::Lookup;

/// Path of the README checked at the repository root
pub const README_PATH: &str = "README.md";

/// Path of the LICENSE checked at the repository root
pub const LICENSE_PATH: &str = "LICENSE";

/// Errors that prevent a request from being made or answered at all
#[derive(Debug, Error)]
pub enum HostError {
    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// The request did not get an HTTP response
    #[error("request to {url} failed: {message}")]
    Transport {
        /// URL that was requested
        url: String,
        /// Error description from the HTTP client
        message: String,
    },
}

/// One page of the organization listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Entries requested per page
    pub per_page: u32,
}

/// Raw answer to an organization listing request
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// HTTP 200 with a JSON array, entries unparsed and in API order
    Entries(Vec<Value>),
    /// Any status other than 200
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
    },
    /// HTTP 200 with a body that is not a JSON array
    Unexpected(Value),
}

/// Repository hosting API abstraction
///
/// Implementations perform the HTTP requests; tests substitute canned answers.
/// Per-repository lookups take the repository's API locator (`url` field).
pub trait RepositoryHost {
    /// List the repositories of an organization
    ///
    /// `None` requests the API's default first page with no query parameters.
    fn list_repositories(&self, org: &str, page: Option<Page>) -> Result<Listing, HostError>;

    /// Check whether a file exists at `path` in the repository
    fn file_exists(&self, repo_url: &str, path: &str) -> Lookup<()>;

    /// Count the CI workflows configured for the repository
    fn workflow_count(&self, repo_url: &str) -> Lookup<u64>;

    /// Names of the entries at the repository root
    fn root_entries(&self, repo_url: &str) -> Lookup<Vec<String>>;

    /// Check for `README.md` at the repository root
    fn readme_exists(&self, repo_url: &str) -> Lookup<()> {
        self.file_exists(repo_url, README_PATH)
    }

    /// Check for `LICENSE` at the repository root
    fn license_exists(&self, repo_url: &str) -> Lookup<()> {
        self.file_exists(repo_url, LICENSE_PATH)
    }
}
