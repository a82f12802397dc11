//! Centralized path definitions for repo-audit
//!
//! ## Layout
//!
//! ```text
//! ./                                 # Working directory
//! ├── validation_report.txt          # Text report (overwritten each run)
//! └── validation_report.json         # JSON report (with --json)
//!
//! ~/.repo-audit/
//! └── config.toml                    # Optional user-level configuration
//! ```

use std::path::PathBuf;

use crate::output::OutputMode;

// =============================================================================
// Report paths (working directory)
// =============================================================================

/// Text report filename
pub const TEXT_REPORT_FILE: &str = "validation_report.txt";

/// JSON report filename
pub const JSON_REPORT_FILE: &str = "validation_report.json";

/// Default report path for an output mode, relative to the working directory.
#[must_use]
pub fn default_report(mode: OutputMode) -> PathBuf {
    match mode {
        OutputMode::Human => PathBuf::from(TEXT_REPORT_FILE),
        OutputMode::Json => PathBuf::from(JSON_REPORT_FILE),
    }
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".repo-audit";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global repo-audit directory.
///
/// Returns `~/.repo-audit/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.repo-audit/config.toml`. Read only if it exists.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
