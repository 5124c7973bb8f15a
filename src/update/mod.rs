//! Version ordering and candidate selection
//!
//! This module provides:
//! - A numeric-segment comparator tolerant of qualifiers
//! - Pre-release detection and candidate filtering
//! - Selection of the newest acceptable version from a pool

mod compare;
mod filter;

pub use compare::{compare, is_at_least, is_up_to_date, segments};
pub use filter::{filter_candidates, is_pre_release, select_latest, PRE_RELEASE_MARKERS};
