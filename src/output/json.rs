//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of check results in catalog order
//! - Summary counts and the cancellation flag

use crate::domain::{CheckSummary, Outcome, ResolvedResult};
use crate::manifest::declaration_line;
use crate::orchestrator::CheckReport;
use crate::output::{CatalogSource, OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Path of the checked catalog
    manifest: String,
    /// Per-library results
    results: Vec<JsonResult>,
    /// Summary statistics
    summary: CheckSummary,
    /// Whether the run stopped early
    cancelled: bool,
}

/// JSON representation of one library
#[derive(Serialize)]
struct JsonResult {
    key: String,
    group: String,
    artifact: String,
    declared: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    latest: Option<String>,
    up_to_date: bool,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    /// 1-based line of the version declaration (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

impl JsonFormatter {
    fn status(outcome: &Outcome) -> &'static str {
        match outcome {
            Outcome::Resolved {
                up_to_date: true, ..
            } => "up_to_date",
            Outcome::Resolved { .. } => "outdated",
            Outcome::NotFound => "not_found",
            Outcome::LookupFailed { .. } => "lookup_failed",
        }
    }

    fn result_to_json(
        &self,
        report: &CheckReport,
        result: &ResolvedResult,
        source: CatalogSource<'_>,
    ) -> JsonResult {
        let coordinate = &result.coordinate;
        let alias = report.alias_for(result.key());
        let line = match (self.verbosity, alias) {
            (Verbosity::Verbose, Some(alias)) => {
                declaration_line(source.content, alias, &coordinate.declared_version)
            }
            _ => None,
        };
        let reason = match &result.outcome {
            Outcome::LookupFailed { reason } => Some(reason.clone()),
            _ => None,
        };

        JsonResult {
            key: coordinate.key.clone(),
            group: coordinate.group.clone(),
            artifact: coordinate.artifact.clone(),
            declared: coordinate.declared_version.clone(),
            alias: alias.map(str::to_string),
            latest: result.latest_version().map(str::to_string),
            up_to_date: result.is_up_to_date(),
            status: Self::status(&result.outcome),
            reason,
            line,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        report: &CheckReport,
        source: CatalogSource<'_>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            manifest: source.path.display().to_string(),
            results: report
                .results
                .iter()
                .map(|r| self.result_to_json(report, r, source))
                .collect(),
            summary: report.summary(),
            cancelled: report.cancelled,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
