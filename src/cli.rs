//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use repo_audit::config::Overrides;
use repo_audit::core::models::Checklist;
use repo_audit::output::OutputMode;

/// repo-audit - Governance audit for an organization's repositories
#[derive(Parser, Debug)]
#[command(
    name = "repo-audit",
    version,
    about = "Audit an organization's repositories against governance policies",
    long_about = "Audit every repository of a GitHub organization against governance policies.\n\n\
                  Checks: issues enabled, default branch is 'main', README.md and LICENSE\n\
                  present. The extended checklist also reports CI and test presence.\n\n\
                  The organization and token come from ORG_NAME and GITHUB_TOKEN."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Audit the organization's repositories and write the report (default)
    Audit(AuditArgs),

    /// Show version
    Version,
}

/// Options for the audit command
#[derive(Args, Debug, Default)]
pub struct AuditArgs {
    /// Organization to audit (overrides ORG_NAME)
    #[arg(long)]
    pub org: Option<String>,

    /// API base URL (overrides GITHUB_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.repo-audit/config.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only check issues and default branch (no extra API lookups)
    #[arg(long, conflicts_with = "extended")]
    pub minimal: bool,

    /// Also check README, LICENSE, CI and tests
    #[arg(long)]
    pub extended: bool,

    /// Report file (default: validation_report.txt, or .json with --json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page through the full repository listing instead of the first page
    #[arg(long)]
    pub all_pages: bool,
}

impl AuditArgs {
    fn overrides(self) -> Overrides {
        let checklist = if self.minimal {
            Some(Checklist::Minimal)
        } else if self.extended {
            Some(Checklist::Extended)
        } else {
            None
        };

        Overrides {
            org: self.org,
            api_url: self.api_url,
            checklist,
            report_path: self.output,
            paginate: self.all_pages,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Audit(args)) => {
            let config_path = args.config.clone();
            commands::audit(config_path.as_deref(), args.overrides(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("repo-audit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => commands::audit(None, Overrides::default(), output_mode),
    }
}
