//! Shared test fixtures and a mock repository host
//!
//! `MockHost` answers every port call from canned data and records the
//! calls it receives, so tests can assert on both results and I/O.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

use repo_audit::config::AuditConfig;
use repo_audit::core::models::{Checklist, Lookup, RepositoryRecord};
use repo_audit::core::ports::{HostError, Listing, Page, RepositoryHost};

/// Base URL used for repository locators in fixtures
pub const API: &str = "https://api.test";

/// API locator of a fixture repository
pub fn repo_url(name: &str) -> String {
    format!("{API}/repos/acme/{name}")
}

/// A listing entry as the hosting API would return it
pub fn repo_json(name: &str, has_issues: bool, branch: &str, private: bool) -> Value {
    json!({
        "name": name,
        "full_name": format!("acme/{name}"),
        "has_issues": has_issues,
        "default_branch": branch,
        "url": repo_url(name),
        "private": private
    })
}

/// A compliant public repository entry
pub fn good_repo(name: &str) -> Value {
    repo_json(name, true, "main", false)
}

/// A parsed repository record
pub fn record(name: &str, has_issues: bool, branch: &str, private: bool) -> RepositoryRecord {
    RepositoryRecord::from_entry(&repo_json(name, has_issues, branch, private)).unwrap()
}

/// A fixed report timestamp
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

/// Configuration for the `acme` organization against the fixture API
pub fn config(checklist: Checklist) -> AuditConfig {
    AuditConfig {
        org: "acme".to_string(),
        token: "test-token".to_string(),
        api_url: API.to_string(),
        checklist,
        ..AuditConfig::default()
    }
}

/// Mock implementation of `RepositoryHost`
///
/// Unknown lookups answer `Absent`. Listing page `n` answers `pages[n - 1]`
/// (an unpaged request answers the first one); pages past the end are empty.
#[derive(Default)]
pub struct MockHost {
    pages: Vec<Listing>,
    unreachable: bool,
    files: HashMap<(String, String), Lookup<()>>,
    workflows: HashMap<String, Lookup<u64>>,
    roots: HashMap<String, Lookup<Vec<String>>>,
    calls: RefCell<Vec<String>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listing answers 200 with these entries
    pub fn with_entries(entries: Vec<Value>) -> Self {
        Self::with_listing(Listing::Entries(entries))
    }

    /// Listing gives this answer
    pub fn with_listing(listing: Listing) -> Self {
        Self {
            pages: vec![listing],
            ..Self::default()
        }
    }

    /// Listing answers page by page
    pub fn with_pages(pages: Vec<Listing>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Listing never gets an HTTP answer
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// A file that exists in the repository
    pub fn file(self, name: &str, path: &str) -> Self {
        self.file_lookup(name, path, Lookup::Found(()))
    }

    pub fn file_lookup(mut self, name: &str, path: &str, lookup: Lookup<()>) -> Self {
        self.files.insert((repo_url(name), path.to_string()), lookup);
        self
    }

    pub fn workflows(mut self, name: &str, lookup: Lookup<u64>) -> Self {
        self.workflows.insert(repo_url(name), lookup);
        self
    }

    /// Root entries of the repository
    pub fn root(self, name: &str, entries: &[&str]) -> Self {
        let names = entries.iter().map(|e| (*e).to_string()).collect();
        self.root_lookup(name, Lookup::Found(names))
    }

    pub fn root_lookup(mut self, name: &str, lookup: Lookup<Vec<String>>) -> Self {
        self.roots.insert(repo_url(name), lookup);
        self
    }

    /// README, LICENSE, one workflow and a `tests` directory
    pub fn fully_compliant(self, name: &str) -> Self {
        self.file(name, "README.md")
            .file(name, "LICENSE")
            .workflows(name, Lookup::Found(1))
            .root(name, &["README.md", "LICENSE", "src", "tests"])
    }

    /// Calls received, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record_call(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl RepositoryHost for MockHost {
    fn list_repositories(&self, org: &str, page: Option<Page>) -> Result<Listing, HostError> {
        match page {
            Some(p) => self.record_call(format!("list {org} page={} per_page={}", p.number, p.per_page)),
            None => self.record_call(format!("list {org}")),
        }

        if self.unreachable {
            return Err(HostError::Transport {
                url: format!("{API}/orgs/{org}/repos"),
                message: "connection refused".to_string(),
            });
        }

        let index = page.map_or(0, |p| p.number as usize - 1);
        Ok(self.pages.get(index).cloned().unwrap_or(Listing::Entries(Vec::new())))
    }

    fn file_exists(&self, repo_url: &str, path: &str) -> Lookup<()> {
        self.record_call(format!("file {repo_url} {path}"));
        self.files
            .get(&(repo_url.to_string(), path.to_string()))
            .cloned()
            .unwrap_or(Lookup::Absent)
    }

    fn workflow_count(&self, repo_url: &str) -> Lookup<u64> {
        self.record_call(format!("workflows {repo_url}"));
        self.workflows.get(repo_url).cloned().unwrap_or(Lookup::Absent)
    }

    fn root_entries(&self, repo_url: &str) -> Lookup<Vec<String>> {
        self.record_call(format!("contents {repo_url}"));
        self.roots.get(repo_url).cloned().unwrap_or(Lookup::Absent)
    }
}
