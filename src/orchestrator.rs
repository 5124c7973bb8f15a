//! Check orchestrator for coordinating the whole check workflow
//!
//! This module provides:
//! - Workflow coordination: parse → resolve → compare → report
//! - Partial-failure tolerance: one dependency failing never aborts the batch
//! - Cooperative cancellation between dependencies
//! - Background execution on a tokio task with a cancellable handle

use crate::config::CheckConfig;
use crate::domain::{CheckSummary, DependencyCoordinate, ResolvedResult};
use crate::error::{CheckError, ResolveError};
use crate::manifest::parse_catalog;
use crate::registry::{HttpClient, VersionResolver};
use crate::update::is_up_to_date;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Receives progress updates while a check runs
pub trait ProgressSink: Send + Sync {
    /// Called before a dependency is looked up, with the fraction already done
    fn on_dependency(&self, coordinate: &DependencyCoordinate, fraction: f64);

    /// Called after a dependency is looked up
    fn on_advance(&self, fraction: f64);

    /// Called once when the run ends, whether finished or cancelled
    fn finish(&self) {}
}

/// A sink that ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_dependency(&self, _coordinate: &DependencyCoordinate, _fraction: f64) {}

    fn on_advance(&self, _fraction: f64) {}
}

/// Result of one check run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    /// Per-dependency results in catalog order
    pub results: Vec<ResolvedResult>,
    /// Coordinate key → version alias key
    pub aliases: IndexMap<String, String>,
    /// Whether the run stopped early
    pub cancelled: bool,
}

impl CheckReport {
    /// Aggregate counts over the results
    pub fn summary(&self) -> CheckSummary {
        CheckSummary::from_results(&self.results)
    }

    /// Version alias used by a coordinate key
    pub fn alias_for(&self, key: &str) -> Option<&str> {
        self.aliases.get(key).map(String::as_str)
    }

    /// Results that are behind the latest version
    pub fn outdated(&self) -> impl Iterator<Item = &ResolvedResult> {
        self.results.iter().filter(|r| r.is_outdated())
    }

    /// Returns true if any dependency is outdated or could not be resolved
    pub fn needs_attention(&self) -> bool {
        self.results.iter().any(|r| !r.is_up_to_date())
    }
}

/// Runs version checks against a resolver
pub struct Checker {
    resolver: VersionResolver,
}

impl Checker {
    /// Create a checker over the configured repositories
    pub fn new(config: &CheckConfig) -> Result<Self, CheckError> {
        let client = HttpClient::from_config(config).map_err(|e| CheckError::HttpClient {
            message: e.to_string(),
        })?;
        Ok(Self::with_resolver(VersionResolver::from_config(
            config, client,
        )))
    }

    /// Create a checker with a custom resolver (for testing)
    pub fn with_resolver(resolver: VersionResolver) -> Self {
        Self { resolver }
    }

    /// Check every library in the catalog text.
    ///
    /// The token is checked before each dependency; once it fires, the
    /// results gathered so far are returned with `cancelled` set.
    pub async fn run(
        &self,
        text: &str,
        sink: &dyn ProgressSink,
        token: &CancellationToken,
    ) -> Result<CheckReport, CheckError> {
        let catalog = parse_catalog(text);
        let total = catalog.len();
        info!(
            "Checking {} libraries against {:?}",
            total,
            self.resolver.source_names()
        );

        let mut results = Vec::with_capacity(total);
        let mut cancelled = false;

        for (processed, coordinate) in catalog.coordinates().enumerate() {
            if token.is_cancelled() {
                debug!("Check cancelled after {} of {}", processed, total);
                cancelled = true;
                break;
            }

            sink.on_dependency(coordinate, fraction(processed, total));
            results.push(self.check_one(coordinate).await);
            sink.on_advance(fraction(processed + 1, total));
        }

        sink.finish();

        Ok(CheckReport {
            results,
            aliases: catalog.aliases,
            cancelled,
        })
    }

    /// Run the check on a background task
    pub fn spawn(self: Arc<Self>, text: String, sink: Arc<dyn ProgressSink>) -> CheckHandle {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let handle =
            tokio::spawn(async move { self.run(&text, sink.as_ref(), &task_token).await });

        CheckHandle { handle, token }
    }

    async fn check_one(&self, coordinate: &DependencyCoordinate) -> ResolvedResult {
        match self.resolver.resolve(coordinate).await {
            Ok(latest) => {
                let up_to_date = is_up_to_date(&coordinate.declared_version, &latest);
                ResolvedResult::resolved(coordinate.clone(), latest, up_to_date)
            }
            Err(e @ ResolveError::NotFound { .. }) => {
                warn!("{}", e);
                ResolvedResult::not_found(coordinate.clone())
            }
            Err(e @ ResolveError::LookupFailed { .. }) => {
                warn!("{}", e);
                ResolvedResult::lookup_failed(coordinate.clone(), lookup_reason(&e))
            }
        }
    }
}

/// Handle to a check running in the background
pub struct CheckHandle {
    handle: JoinHandle<Result<CheckReport, CheckError>>,
    token: CancellationToken,
}

impl CheckHandle {
    /// Ask the check to stop before the next dependency
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// A clone of the token driving this check
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Wait for the check to finish
    pub async fn join(self) -> Result<CheckReport, CheckError> {
        self.handle.await.map_err(|e| CheckError::TaskFailed {
            message: e.to_string(),
        })?
    }
}

fn fraction(done: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        done as f64 / total as f64
    }
}

/// Per-repository reasons without the coordinate prefix
fn lookup_reason(error: &ResolveError) -> String {
    match error {
        ResolveError::LookupFailed { misses, .. } => misses
            .iter()
            .filter(|m| !m.is_not_found())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
        ResolveError::NotFound { .. } => error.to_string(),
    }
}
