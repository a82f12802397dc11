//! GitHub REST API adapter
//!
//! Blocking `reqwest` implementation of [`RepositoryHost`]. Every request
//! carries the bearer token, the GitHub JSON `Accept` header and a
//! `User-Agent`. There are no retries.

use log::debug;
use reqwest::{StatusCode, Url};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::AuditConfig;
use crate::core::models::{Lookup, LookupFailure};
use crate::core::ports::{HostError, Listing, Page, RepositoryHost};

/// Content type requested from the API
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("repo-audit/", env!("CARGO_PKG_VERSION"));

const WORKFLOWS_RESOURCE: &str = "actions/workflows";
const CONTENTS_RESOURCE: &str = "contents";

/// Client for a GitHub-compatible REST API
#[derive(Debug)]
pub struct GithubClient {
    client: Client,
    api_url: Url,
}

impl GithubClient {
    /// Build a client from the run configuration
    ///
    /// An empty token still produces an `Authorization` header; the API
    /// decides what to do with it. The API URL must be an absolute base URL.
    pub fn new(config: &AuditConfig) -> Result<Self, HostError> {
        let api_url = Url::parse(config.api_url.trim_end_matches('/'))
            .map_err(|e| HostError::Client(format!("invalid API URL '{}': {e}", config.api_url)))?;
        if api_url.cannot_be_a_base() {
            return Err(HostError::Client(format!("API URL '{}' cannot be a base URL", config.api_url)));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| HostError::Client(format!("token is not a valid header value: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| HostError::Client(e.to_string()))?;

        Ok(Self { client, api_url })
    }

    /// `{api}/orgs/{org}/repos`, with `org` encoded as a single path segment
    fn listing_url(&self, org: &str, page: Option<Page>) -> Result<Url, HostError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| HostError::Client(format!("API URL '{}' cannot be a base URL", self.api_url)))?
            .pop_if_empty()
            .extend(["orgs", org, "repos"]);
        if let Some(p) = page {
            url.query_pairs_mut()
                .append_pair("per_page", &p.per_page.to_string())
                .append_pair("page", &p.number.to_string());
        }
        Ok(url)
    }

    fn get(&self, url: &str) -> Result<Response, HostError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().map_err(|e| HostError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        debug!("GET {url} -> {}", response.status().as_u16());
        Ok(response)
    }

    /// GET `{repo_url}/{resource}`; only 200 counts as found
    fn lookup(&self, repo_url: &str, resource: &str) -> Lookup<Response> {
        let url = format!("{}/{resource}", repo_url.trim_end_matches('/'));
        match self.get(&url) {
            Ok(response) => match response.status() {
                StatusCode::OK => Lookup::Found(response),
                StatusCode::NOT_FOUND => Lookup::Absent,
                status => Lookup::Failed(LookupFailure::Status {
                    resource: resource.to_string(),
                    status: status.as_u16(),
                }),
            },
            Err(e) => Lookup::Failed(LookupFailure::Transport {
                resource: resource.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn lookup_json(&self, repo_url: &str, resource: &str) -> Lookup<Value> {
        self.lookup(repo_url, resource).and_then(|response| match response.json::<Value>() {
            Ok(value) => Lookup::Found(value),
            Err(e) => decode_failure(resource, e.to_string()),
        })
    }
}

impl RepositoryHost for GithubClient {
    fn list_repositories(&self, org: &str, page: Option<Page>) -> Result<Listing, HostError> {
        let url = self.listing_url(org, page)?.to_string();

        let response = self.get(&url)?;
        let status = response.status();
        let body = response.text().map_err(|e| HostError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if status != StatusCode::OK {
            return Ok(Listing::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(match serde_json::from_str::<Value>(&body) {
            Ok(Value::Array(entries)) => Listing::Entries(entries),
            Ok(other) => Listing::Unexpected(other),
            Err(_) => Listing::Unexpected(Value::String(body)),
        })
    }

    fn file_exists(&self, repo_url: &str, path: &str) -> Lookup<()> {
        self.lookup(repo_url, &format!("{CONTENTS_RESOURCE}/{path}")).and_then(|_| Lookup::Found(()))
    }

    fn workflow_count(&self, repo_url: &str) -> Lookup<u64> {
        self.lookup_json(repo_url, WORKFLOWS_RESOURCE).and_then(|value| {
            match parse_workflow_count(&value) {
                Some(count) => Lookup::Found(count),
                None => decode_failure(WORKFLOWS_RESOURCE, "no workflow count".to_string()),
            }
        })
    }

    fn root_entries(&self, repo_url: &str) -> Lookup<Vec<String>> {
        self.lookup_json(repo_url, CONTENTS_RESOURCE).and_then(|value| {
            match parse_entry_names(&value) {
                Some(names) => Lookup::Found(names),
                None => decode_failure(CONTENTS_RESOURCE, "expected a directory listing".to_string()),
            }
        })
    }
}

fn decode_failure<T>(resource: &str, message: String) -> Lookup<T> {
    Lookup::Failed(LookupFailure::Decode {
        resource: resource.to_string(),
        message,
    })
}

/// `total_count`, falling back to the length of `workflows`
fn parse_workflow_count(value: &Value) -> Option<u64> {
    value.get("total_count").and_then(Value::as_u64).or_else(|| {
        value
            .get("workflows")
            .and_then(Value::as_array)
            .and_then(|workflows| u64::try_from(workflows.len()).ok())
    })
}

/// Names of the entries of a directory listing; `None` if it is not a list
fn parse_entry_names(value: &Value) -> Option<Vec<String>> {
    let entries = value.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(|entry| entry.get("name").and_then(Value::as_str).map(String::from))
            .collect(),
    )
}
