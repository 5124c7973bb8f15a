//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One aligned line per library with a status marker
//! - Change type indication (major/minor/patch) for outdated libraries
//! - Declaration locations in verbose mode
//! - Summary with a per-outcome breakdown

use crate::domain::{CheckSummary, Outcome, ResolvedResult};
use crate::manifest::declaration_line;
use crate::orchestrator::CheckReport;
use crate::output::{CatalogSource, OutputFormatter, Verbosity};
use crate::update::segments;
use colored::Colorize;
use std::io::Write;

/// How far an outdated version is behind, by its leading segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// First segment differs
    Major,
    /// Second segment differs
    Minor,
    /// Only later segments differ
    Patch,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let old = segments(old);
        let new = segments(new);
        let at = |s: &[i32], i: usize| s.get(i).copied().unwrap_or(0);

        if at(&old, 0) != at(&new, 0) {
            VersionChangeType::Major
        } else if at(&old, 1) != at(&new, 1) {
            VersionChangeType::Minor
        } else {
            VersionChangeType::Patch
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn marker(&self, result: &ResolvedResult) -> String {
        let (symbol, up_to_date, outdated) = match result.outcome {
            Outcome::Resolved {
                up_to_date: true, ..
            } => ("✓", true, false),
            Outcome::Resolved { .. } => ("✗", false, true),
            _ => ("?", false, false),
        };
        if !self.color {
            symbol.to_string()
        } else if up_to_date {
            symbol.green().to_string()
        } else if outdated {
            symbol.red().bold().to_string()
        } else {
            symbol.yellow().to_string()
        }
    }

    fn status(&self, result: &ResolvedResult) -> String {
        let declared = &result.coordinate.declared_version;
        match &result.outcome {
            Outcome::Resolved {
                up_to_date: true, ..
            } => declared.to_string(),
            Outcome::Resolved { latest, .. } => {
                let change = VersionChangeType::from_versions(declared, latest);
                if self.color {
                    format!(
                        "{} {} {} [{}]",
                        declared.dimmed(),
                        "→".dimmed(),
                        latest.bright_white().bold(),
                        change.colored_label()
                    )
                } else {
                    format!("{} → {} [{}]", declared, latest, change.label())
                }
            }
            Outcome::NotFound => self.paint_dimmed(format!("{} (not found)", declared)),
            Outcome::LookupFailed { reason } => {
                self.paint_dimmed(format!("{} (lookup failed: {})", declared, reason))
            }
        }
    }

    fn paint_dimmed(&self, text: String) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text
        }
    }

    /// Location of the version declaration, e.g. ` (gradle/libs.versions.toml:4)`
    fn location(
        &self,
        report: &CheckReport,
        result: &ResolvedResult,
        source: CatalogSource<'_>,
    ) -> String {
        let Some(alias) = report.alias_for(result.key()) else {
            return String::new();
        };
        let declared = &result.coordinate.declared_version;
        let Some(line) = declaration_line(source.content, alias, declared) else {
            return String::new();
        };
        self.paint_dimmed(format!(" ({}:{})", source.path.display(), line))
    }

    fn format_line(
        &self,
        report: &CheckReport,
        result: &ResolvedResult,
        source: CatalogSource<'_>,
        widths: (usize, usize),
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let (key_width, module_width) = widths;
        let location = if self.verbosity == Verbosity::Verbose {
            self.location(report, result, source)
        } else {
            String::new()
        };

        writeln!(
            writer,
            "  {} {:key_width$} {:module_width$} {}{}",
            self.marker(result),
            result.key(),
            result.coordinate.module(),
            self.status(result),
            location,
            key_width = key_width,
            module_width = module_width
        )
    }

    fn format_summary(
        &self,
        summary: &CheckSummary,
        cancelled: bool,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let suffix = if cancelled { " (cancelled)" } else { "" };

        if summary.total == 0 {
            let message = self.paint_dimmed("No libraries to check".to_string());
            return writeln!(writer, "{}{}", message, suffix);
        }

        let mut parts = Vec::new();
        if self.color {
            parts.push(format!("{} up to date", summary.up_to_date.to_string().green()));
            parts.push(format!("{} outdated", summary.outdated.to_string().red()));
        } else {
            parts.push(format!("{} up to date", summary.up_to_date));
            parts.push(format!("{} outdated", summary.outdated));
        }
        if summary.not_found > 0 {
            parts.push(format!("{} not found", summary.not_found));
        }
        if summary.lookup_failed > 0 {
            parts.push(format!("{} lookup failed", summary.lookup_failed));
        }

        let label = if summary.total == 1 { "library" } else { "libraries" };
        writeln!(
            writer,
            "{} {} checked: {}{}",
            summary.total,
            label,
            parts.join(", "),
            suffix
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        report: &CheckReport,
        source: CatalogSource<'_>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let summary = report.summary();

        // In quiet mode, only show summary
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(&summary, report.cancelled, writer);
        }

        let path_display = source.path.display().to_string();
        if self.color {
            writeln!(writer, "{}", path_display.bold())?;
        } else {
            writeln!(writer, "{}", path_display)?;
        }

        let key_width = report.results.iter().map(|r| r.key().len()).max().unwrap_or(0);
        let module_width = report
            .results
            .iter()
            .map(|r| r.coordinate.module().len())
            .max()
            .unwrap_or(0);

        for result in &report.results {
            self.format_line(report, result, source, (key_width, module_width), writer)?;
        }

        writeln!(writer)?;
        self.format_summary(&summary, report.cancelled, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyCoordinate;
    use indexmap::IndexMap;
    use std::path::Path;

    const CATALOG: &str = "[versions]\ncore = \"1.0.0\"\nokhttp = \"4.11.0\"\nmissing = \"0.1\"\n\n[libraries]\ncore = { module = \"androidx.core:core-ktx\", version.ref = \"core\" }\nokhttp = { module = \"com.squareup.okhttp3:okhttp\", version.ref = \"okhttp\" }\nmissing = { module = \"com.example:missing\", version.ref = \"missing\" }\n";

    fn sample_report() -> CheckReport {
        let mut aliases = IndexMap::new();
        aliases.insert("core".to_string(), "core".to_string());
        aliases.insert("okhttp".to_string(), "okhttp".to_string());
        aliases.insert("missing".to_string(), "missing".to_string());

        CheckReport {
            results: vec![
                ResolvedResult::resolved(
                    DependencyCoordinate::new("core", "androidx.core", "core-ktx", "1.0.0"),
                    "1.0.0",
                    true,
                ),
                ResolvedResult::resolved(
                    DependencyCoordinate::new("okhttp", "com.squareup.okhttp3", "okhttp", "4.11.0"),
                    "4.12.0",
                    false,
                ),
                ResolvedResult::not_found(DependencyCoordinate::new(
                    "missing",
                    "com.example",
                    "missing",
                    "0.1",
                )),
            ],
            aliases,
            cancelled: false,
        }
    }

    fn render(verbosity: Verbosity, report: &CheckReport) -> String {
        let formatter = TextFormatter::with_color(verbosity, false);
        let mut output = Vec::new();
        let source = CatalogSource::new(Path::new("gradle/libs.versions.toml"), CATALOG);
        formatter.format(report, source, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_version_change_type() {
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "2.0.0"),
            VersionChangeType::Major
        );
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "1.1.0"),
            VersionChangeType::Minor
        );
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "1.0.1"),
            VersionChangeType::Patch
        );
        assert_eq!(
            VersionChangeType::from_versions("1.2", "1.2.0-alpha02"),
            VersionChangeType::Patch
        );
    }

    #[test]
    fn test_format_normal() {
        let output = render(Verbosity::Normal, &sample_report());

        assert!(output.starts_with("gradle/libs.versions.toml\n"));
        assert!(output.contains("✓ core"));
        assert!(output.contains("androidx.core:core-ktx"));
        assert!(output.contains("✗ okhttp"));
        assert!(output.contains("4.11.0 → 4.12.0 [minor]"));
        assert!(output.contains("? missing"));
        assert!(output.contains("0.1 (not found)"));
        assert!(output.contains("3 libraries checked: 1 up to date, 1 outdated, 1 not found"));
        assert!(!output.contains("libs.versions.toml:"));
    }

    #[test]
    fn test_format_lines_in_catalog_order() {
        let output = render(Verbosity::Normal, &sample_report());
        let core = output.find("✓ core").unwrap();
        let okhttp = output.find("✗ okhttp").unwrap();
        let missing = output.find("? missing").unwrap();
        assert!(core < okhttp && okhttp < missing);
    }

    #[test]
    fn test_format_verbose_adds_location() {
        let output = render(Verbosity::Verbose, &sample_report());

        assert!(output.contains("(gradle/libs.versions.toml:2)"));
        assert!(output.contains("(gradle/libs.versions.toml:3)"));
        assert!(output.contains("(gradle/libs.versions.toml:4)"));
    }

    #[test]
    fn test_format_quiet() {
        let output = render(Verbosity::Quiet, &sample_report());
        assert_eq!(
            output,
            "3 libraries checked: 1 up to date, 1 outdated, 1 not found\n"
        );
    }

    #[test]
    fn test_format_lookup_failed() {
        let mut report = sample_report();
        report.results[2] = ResolvedResult::lookup_failed(
            report.results[2].coordinate.clone(),
            "timeout while fetching 'com.example:missing' from Maven Central",
        );
        let output = render(Verbosity::Normal, &report);

        assert!(output.contains("0.1 (lookup failed: timeout while fetching"));
        assert!(output.contains("1 lookup failed"));
    }

    #[test]
    fn test_format_cancelled() {
        let mut report = sample_report();
        report.results.truncate(1);
        report.cancelled = true;
        let output = render(Verbosity::Quiet, &report);

        assert_eq!(output, "1 library checked: 1 up to date, 0 outdated (cancelled)\n");
    }

    #[test]
    fn test_format_empty() {
        let report = CheckReport {
            results: Vec::new(),
            aliases: IndexMap::new(),
            cancelled: false,
        };
        let output = render(Verbosity::Normal, &report);
        assert!(output.contains("No libraries to check"));
    }
}
