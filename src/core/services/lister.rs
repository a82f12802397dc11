//! Repository lister - fetches the organization's repository listing
//!
//! By default a single listing request is made and only the first page the
//! API returns is audited. Paging through the whole collection is opt-in.

use log::{debug, warn};
use serde_json::Value;

use crate::core::ports::{Listing, Page, RepositoryHost};

/// Largest page size the hosting API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// How the listing is paged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Follow pages until a short page is returned
    pub enabled: bool,
    /// Entries per page when paging
    pub per_page: u32,
    /// Upper bound on the number of pages requested
    pub max_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            enabled: false,
            per_page: MAX_PER_PAGE,
            max_pages: 50,
        }
    }
}

/// Why the listing produced no repositories
#[derive(Debug, Clone, PartialEq)]
pub enum ListFailure {
    /// The API answered with a non-200 status
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body as text
        body: String,
    },
    /// No HTTP answer was received
    Unreachable(String),
    /// The API answered 200 with something other than a list
    Unexpected(Value),
}

impl std::fmt::Display for ListFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { status, .. } => write!(f, "API answered with status {status}"),
            Self::Unreachable(message) => write!(f, "API unreachable: {message}"),
            Self::Unexpected(_) => write!(f, "API answered with something other than a list"),
        }
    }
}

/// Result of listing an organization's repositories
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// Raw listing entries, in API order
    Listed(Vec<Value>),
    /// The listing failed; the run has nothing to audit
    Failed(ListFailure),
}

/// List the repositories of `org`
///
/// Failures are returned, never raised: a rejected first request means the
/// organization is treated as having no repositories. When paging, a
/// failure after the first page keeps what was already collected.
pub fn list_repositories(
    host: &dyn RepositoryHost,
    org: &str,
    pagination: &Pagination,
) -> ListOutcome {
    if org.is_empty() {
        warn!("Organization name is empty; the API will reject the listing request");
    }

    if !pagination.enabled {
        return match fetch(host, org, None) {
            Ok(entries) => ListOutcome::Listed(entries),
            Err(failure) => ListOutcome::Failed(failure),
        };
    }

    let per_page = pagination.per_page.clamp(1, MAX_PER_PAGE);
    let mut entries = Vec::new();
    for number in 1..=pagination.max_pages.max(1) {
        let page = Page { number, per_page };
        match fetch(host, org, Some(page)) {
            Ok(batch) => {
                let short_page = batch.len() < per_page as usize;
                entries.extend(batch);
                if short_page {
                    return ListOutcome::Listed(entries);
                }
            },
            Err(failure) if number == 1 => return ListOutcome::Failed(failure),
            Err(failure) => {
                warn!("Stopped paging at page {number}: {failure}");
                return ListOutcome::Listed(entries);
            },
        }
    }

    warn!(
        "Reached the page limit ({}); later repositories are not audited",
        pagination.max_pages.max(1)
    );
    ListOutcome::Listed(entries)
}

fn fetch(host: &dyn RepositoryHost, org: &str, page: Option<Page>) -> Result<Vec<Value>, ListFailure> {
    match page {
        Some(p) => debug!("Listing repositories of '{org}' (page {}, {} per page)", p.number, p.per_page),
        None => debug!("Listing repositories of '{org}'"),
    }

    match host.list_repositories(org, page) {
        Ok(Listing::Entries(entries)) => {
            debug!("Listing returned {} entr(ies)", entries.len());
            Ok(entries)
        },
        Ok(Listing::Rejected { status, body }) => Err(ListFailure::Rejected { status, body }),
        Ok(Listing::Unexpected(value)) => Err(ListFailure::Unexpected(value)),
        Err(e) => Err(ListFailure::Unreachable(e.to_string())),
    }
}
