//! CLI argument parsing module for catup

use crate::config::{CheckConfig, RepositoryConfig};
use crate::error::ConfigError;
use crate::manifest::CATALOG_FILENAME;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Default catalog location relative to the working directory
pub const DEFAULT_CATALOG_PATH: &str = "gradle/libs.versions.toml";

/// Validate a repository base URL (http or https)
fn parse_repository_url(s: &str) -> Result<String, String> {
    let s = s.trim();
    RepositoryConfig::from_url(s)
        .map(|_| s.to_string())
        .map_err(|e| e.to_string())
}

/// Check a Gradle version catalog for outdated libraries
#[derive(Parser, Debug, Clone)]
#[command(
    name = "catup",
    version,
    about = "Check a Gradle version catalog (libs.versions.toml) for outdated libraries"
)]
pub struct CliArgs {
    /// Catalog file, or a directory containing one
    #[arg(default_value = DEFAULT_CATALOG_PATH)]
    pub path: PathBuf,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable quiet mode - summary only, no progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output (declaration lines, debug logging)
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    // Repository options
    /// Repository base URL to query instead of the defaults
    /// (can be specified multiple times; tried in order)
    #[arg(long = "repository", value_name = "URL", action = ArgAction::Append, value_parser = parse_repository_url)]
    pub repositories: Vec<String>,
}

impl CliArgs {
    /// Reject option combinations that make no sense together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Build the check configuration from the repository options
    pub fn check_config(&self) -> Result<CheckConfig, ConfigError> {
        CheckConfig::new().with_repository_urls(&self.repositories)
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "catup=debug"
        } else {
            "warn"
        }
    }

    /// Returns true if the path names the default catalog location
    pub fn is_default_path(&self) -> bool {
        self.path == PathBuf::from(DEFAULT_CATALOG_PATH)
    }
}

/// File name shown in help and errors for the expected catalog
pub fn catalog_hint() -> String {
    format!("expected {} or a directory containing it", CATALOG_FILENAME)
}
