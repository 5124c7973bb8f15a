//! Core domain models for catup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency coordinates parsed from a version catalog
//! - Per-dependency check results and their outcomes
//! - Summary counts for a whole check run

mod coordinate;
mod resolved;
mod summary;

pub use coordinate::DependencyCoordinate;
pub use resolved::{Outcome, ResolvedResult};
pub use summary::CheckSummary;
