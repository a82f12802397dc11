//! Tests for configuration loading and precedence

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use repo_audit::config::{
    API_URL_ENV, AuditConfig, ConfigError, DEFAULT_API_URL, FileConfig, ORG_ENV, Overrides,
    TOKEN_ENV,
};
use repo_audit::core::models::Checklist;
use repo_audit::output::OutputMode;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[test]
fn defaults_without_any_source() {
    let config = AuditConfig::resolve(FileConfig::default(), |_| None, Overrides::default());

    assert!(config.org.is_empty());
    assert!(config.token.is_empty());
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.checklist, Checklist::Extended);
    assert!(!config.pagination.enabled);
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.report_path(OutputMode::Human), PathBuf::from("validation_report.txt"));
    assert_eq!(config.report_path(OutputMode::Json), PathBuf::from("validation_report.json"));
}

#[test]
fn environment_overrides_file() {
    let file = FileConfig {
        org: Some("from-file".to_string()),
        token: Some("file-token".to_string()),
        ..FileConfig::default()
    };

    let config = AuditConfig::resolve(
        file,
        env_from(&[(ORG_ENV, "from-env"), (TOKEN_ENV, "env-token")]),
        Overrides::default(),
    );

    assert_eq!(config.org, "from-env");
    assert_eq!(config.token, "env-token");
}

#[test]
fn flags_override_environment() {
    let overrides = Overrides {
        org: Some("from-flag".to_string()),
        api_url: Some("http://localhost:9999/".to_string()),
        checklist: Some(Checklist::Minimal),
        report_path: Some(PathBuf::from("out/report.txt")),
        paginate: true,
    };

    let config = AuditConfig::resolve(
        FileConfig::default(),
        env_from(&[(ORG_ENV, "from-env"), (API_URL_ENV, "http://env.test")]),
        overrides,
    );

    assert_eq!(config.org, "from-flag");
    assert_eq!(config.api_url, "http://localhost:9999");
    assert_eq!(config.checklist, Checklist::Minimal);
    assert!(config.pagination.enabled);
    assert_eq!(config.report_path(OutputMode::Json), PathBuf::from("out/report.txt"));
}

#[test]
fn empty_environment_values_are_unset() {
    let file = FileConfig {
        org: Some("from-file".to_string()),
        ..FileConfig::default()
    };

    let config = AuditConfig::resolve(file, env_from(&[(ORG_ENV, "")]), Overrides::default());

    assert_eq!(config.org, "from-file");
}

#[test]
fn debug_output_hides_token() {
    let config = AuditConfig::resolve(
        FileConfig::default(),
        env_from(&[(TOKEN_ENV, "ghp_secret")]),
        Overrides::default(),
    );

    let debug = format!("{config:?}");
    assert!(!debug.contains("ghp_secret"));
    assert!(debug.contains("<redacted>"));
}

// =============================================================================
// CONFIG FILE
// =============================================================================

#[test]
fn file_config_parses_all_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
org = "acme"
api_url = "https://ghe.example.com/api/v3"
checklist = "minimal"
report_path = "reports/acme.txt"
paginate = true
per_page = 50
max_pages = 4
timeout_secs = 5
"#,
    )
    .unwrap();

    let file = FileConfig::load(&path).unwrap();
    let config = AuditConfig::resolve(file, |_| None, Overrides::default());

    assert_eq!(config.org, "acme");
    assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
    assert_eq!(config.checklist, Checklist::Minimal);
    assert!(config.pagination.enabled);
    assert_eq!(config.pagination.per_page, 50);
    assert_eq!(config.pagination.max_pages, 4);
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.report_path(OutputMode::Human), PathBuf::from("reports/acme.txt"));
}

#[test]
fn zero_timeout_disables_the_timeout() {
    let file = FileConfig {
        timeout_secs: Some(0),
        ..FileConfig::default()
    };

    let config = AuditConfig::resolve(file, |_| None, Overrides::default());

    assert_eq!(config.timeout, None);
}

#[test]
fn file_config_rejects_unknown_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "organisation = \"acme\"\n").unwrap();

    let err = FileConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = AuditConfig::load(Some(&path), Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

// =============================================================================
// PROCESS ENVIRONMENT
// =============================================================================

#[test]
#[serial]
fn load_reads_process_environment() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "org = \"file-org\"\ntoken = \"file-token\"\n").unwrap();

    // SAFETY: serialized with other environment-mutating tests
    unsafe {
        std::env::set_var(ORG_ENV, "env-org");
        std::env::remove_var(TOKEN_ENV);
        std::env::remove_var(API_URL_ENV);
    }

    let config = AuditConfig::load(Some(&path), Overrides::default()).unwrap();

    unsafe {
        std::env::remove_var(ORG_ENV);
    }

    assert_eq!(config.org, "env-org");
    assert_eq!(config.token, "file-token");
    assert_eq!(config.api_url, DEFAULT_API_URL);
}
