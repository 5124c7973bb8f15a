//! Per-dependency check result types

use super::DependencyCoordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened when looking up the latest version of one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// A repository answered with a usable version
    Resolved {
        /// Newest acceptable version
        latest: String,
        /// Whether the declared version is at least `latest`
        up_to_date: bool,
    },
    /// No repository had an acceptable version for this coordinate
    NotFound,
    /// At least one repository failed (network, timeout, bad document)
    LookupFailed {
        /// Human-readable reason
        reason: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Resolved {
                up_to_date: true, ..
            } => write!(f, "up to date"),
            Outcome::Resolved { latest, .. } => write!(f, "outdated (latest {})", latest),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::LookupFailed { reason } => write!(f, "lookup failed: {}", reason),
        }
    }
}

/// Result of checking one dependency, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResult {
    /// The dependency that was checked
    pub coordinate: DependencyCoordinate,
    /// Lookup outcome
    pub outcome: Outcome,
}

impl ResolvedResult {
    /// Creates a result for a successfully resolved dependency
    pub fn resolved(
        coordinate: DependencyCoordinate,
        latest: impl Into<String>,
        up_to_date: bool,
    ) -> Self {
        Self {
            coordinate,
            outcome: Outcome::Resolved {
                latest: latest.into(),
                up_to_date,
            },
        }
    }

    /// Creates a result for a dependency no repository knew about
    pub fn not_found(coordinate: DependencyCoordinate) -> Self {
        Self {
            coordinate,
            outcome: Outcome::NotFound,
        }
    }

    /// Creates a result for a dependency whose lookup failed
    pub fn lookup_failed(coordinate: DependencyCoordinate, reason: impl Into<String>) -> Self {
        Self {
            coordinate,
            outcome: Outcome::LookupFailed {
                reason: reason.into(),
            },
        }
    }

    /// Latest version, absent when nothing usable was found
    pub fn latest_version(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Resolved { latest, .. } => Some(latest),
            _ => None,
        }
    }

    /// Returns true only for resolved dependencies at or above the latest version
    pub fn is_up_to_date(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Resolved {
                up_to_date: true,
                ..
            }
        )
    }

    /// Returns true for resolved dependencies behind the latest version
    pub fn is_outdated(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Resolved {
                up_to_date: false,
                ..
            }
        )
    }

    /// Returns true if no latest version could be determined
    pub fn is_unresolved(&self) -> bool {
        self.latest_version().is_none()
    }

    /// Returns the catalog key
    pub fn key(&self) -> &str {
        &self.coordinate.key
    }
}

impl fmt::Display for ResolvedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.coordinate, self.outcome)
    }
}
