//! Run configuration
//!
//! One [`AuditConfig`] is built per run and passed explicitly to the lister,
//! the validator and the HTTP client. Sources, lowest precedence first:
//!
//! 1. TOML file (`--config <path>`, else `~/.repo-audit/config.toml` if present)
//! 2. Environment: `ORG_NAME`, `GITHUB_TOKEN`, `GITHUB_API_URL`
//! 3. Command-line overrides
//!
//! Missing organization or token are not errors: the API rejects the request.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Checklist;
use crate::core::services::Pagination;
use crate::output::OutputMode;
use crate::paths;

/// Environment variable holding the organization name
pub const ORG_ENV: &str = "ORG_NAME";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`FileConfig`]
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the TOML config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Organization to audit
    pub org: Option<String>,
    /// API token
    pub token: Option<String>,
    /// API base URL
    pub api_url: Option<String>,
    /// Checklist to apply
    pub checklist: Option<Checklist>,
    /// Where to write the report
    pub report_path: Option<PathBuf>,
    /// Page through the whole listing
    pub paginate: Option<bool>,
    /// Entries per page when paging
    pub per_page: Option<u32>,
    /// Maximum pages requested when paging
    pub max_pages: Option<u32>,
    /// Request timeout in seconds; 0 disables it
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Values given on the command line; `None`/`false` leaves lower sources in effect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Organization to audit
    pub org: Option<String>,
    /// API base URL
    pub api_url: Option<String>,
    /// Checklist to apply
    pub checklist: Option<Checklist>,
    /// Where to write the report
    pub report_path: Option<PathBuf>,
    /// Page through the whole listing
    pub paginate: bool,
}

/// Fully resolved configuration for one run
#[derive(Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Organization to audit (may be empty)
    pub org: String,
    /// API token (may be empty)
    pub token: String,
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Checklist to apply
    pub checklist: Checklist,
    /// Explicit report path; `None` uses the default for the output mode
    pub report_path: Option<PathBuf>,
    /// Listing pagination
    pub pagination: Pagination,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), |_| None, Overrides::default())
    }
}

impl std::fmt::Debug for AuditConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditConfig")
            .field("org", &self.org)
            .field("token", &if self.token.is_empty() { "<empty>" } else { "<redacted>" })
            .field("api_url", &self.api_url)
            .field("checklist", &self.checklist)
            .field("report_path", &self.report_path)
            .field("pagination", &self.pagination)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AuditConfig {
    /// Load configuration from the config file, the process environment and `overrides`
    ///
    /// An explicit `config_path` must exist; the global config file is optional.
    pub fn load(config_path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => FileConfig::load(path)?,
            None => {
                let global = paths::global_config();
                if global.exists() {
                    FileConfig::load(&global)?
                } else {
                    FileConfig::default()
                }
            },
        };

        let config = Self::resolve(file, |key| std::env::var(key).ok(), overrides);
        debug!("Resolved configuration: {config:?}");

        if config.org.is_empty() {
            warn!("{ORG_ENV} is not set; the listing request will be rejected");
        }
        if config.token.is_empty() {
            warn!("{TOKEN_ENV} is not set; requests are sent without a usable token");
        }

        Ok(config)
    }

    /// Merge the three sources; `env` looks up an environment variable
    ///
    /// Empty environment values count as unset.
    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Self {
        let env_value = |key: &str| env(key).filter(|value| !value.is_empty());

        let org = overrides.org.or_else(|| env_value(ORG_ENV)).or(file.org).unwrap_or_default();
        let token = env_value(TOKEN_ENV).or(file.token).unwrap_or_default();
        let api_url = overrides
            .api_url
            .or_else(|| env_value(API_URL_ENV))
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let defaults = Pagination::default();
        let pagination = Pagination {
            enabled: overrides.paginate || file.paginate.unwrap_or(defaults.enabled),
            per_page: file.per_page.unwrap_or(defaults.per_page),
            max_pages: file.max_pages.unwrap_or(defaults.max_pages),
        };

        Self {
            org,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            checklist: overrides.checklist.or(file.checklist).unwrap_or_default(),
            report_path: overrides.report_path.or(file.report_path),
            pagination,
            timeout: match file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }

    /// Where the report is written for `mode`
    #[must_use]
    pub fn report_path(&self, mode: OutputMode) -> PathBuf {
        self.report_path.clone().unwrap_or_else(|| paths::default_report(mode))
    }
}
