//! catup - Gradle version catalog update checker CLI tool
//!
//! Reads `libs.versions.toml`, looks up the latest published version of each
//! library in Maven repositories and reports which ones are outdated.

use catup::cli::{catalog_hint, CliArgs};
use catup::error::ManifestError;
use catup::manifest::read_catalog;
use catup::orchestrator::{Checker, ProgressSink};
use catup::output::{create_formatter, CatalogSource, OutputConfig};
use catup::progress::Progress;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code when any library is outdated, unresolved or the run was cancelled
const EXIT_NEEDS_ATTENTION: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    args.validate()?;
    let config = args.check_config()?;

    // Reject bad input before any background work starts
    let (path, content) = match read_catalog(&args.path) {
        Ok(found) => found,
        Err(e @ ManifestError::NotFound { .. }) if args.is_default_path() => {
            anyhow::bail!("{} ({})", e, catalog_hint());
        }
        Err(e) => return Err(e.into()),
    };

    if args.verbose {
        eprintln!("catup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Catalog: {}", path.display());
        for repo in &config.repositories {
            eprintln!("Repository: {} ({})", repo.name, repo.base_url);
        }
    }

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let sink: Arc<dyn ProgressSink> = Arc::new(Progress::new(output_config.shows_progress()));

    let checker = Arc::new(Checker::new(&config)?);
    let handle = checker.spawn(content.clone(), sink);

    // Ctrl-C stops the check before the next library
    let token = handle.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling check");
            token.cancel();
        }
    });

    let report = handle.join().await?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&report, CatalogSource::new(&path, &content), &mut stdout)?;
    stdout.flush()?;

    if report.cancelled || report.needs_attention() {
        Ok(ExitCode::from(EXIT_NEEDS_ATTENTION))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
