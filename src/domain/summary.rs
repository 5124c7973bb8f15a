//! Check summary counts
//!
//! Provides aggregate counts over a list of per-dependency results.

use super::{Outcome, ResolvedResult};
use serde::{Deserialize, Serialize};

/// Aggregate counts for one check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Number of dependencies checked
    pub total: usize,
    /// Dependencies at or above the latest version
    pub up_to_date: usize,
    /// Dependencies behind the latest version
    pub outdated: usize,
    /// Dependencies no repository knew about
    pub not_found: usize,
    /// Dependencies whose lookup failed
    pub lookup_failed: usize,
}

impl CheckSummary {
    /// Counts outcomes over a list of results
    pub fn from_results(results: &[ResolvedResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.add(result);
        }
        summary
    }

    /// Adds one result to the counts
    pub fn add(&mut self, result: &ResolvedResult) {
        self.total += 1;
        match result.outcome {
            Outcome::Resolved {
                up_to_date: true, ..
            } => self.up_to_date += 1,
            Outcome::Resolved { .. } => self.outdated += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::LookupFailed { .. } => self.lookup_failed += 1,
        }
    }

    /// Dependencies without a latest version
    pub fn unresolved(&self) -> usize {
        self.not_found + self.lookup_failed
    }

    /// Returns true if every checked dependency is up to date
    pub fn all_up_to_date(&self) -> bool {
        self.up_to_date == self.total
    }
}
