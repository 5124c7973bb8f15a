//! Pre-release candidate filtering
//!
//! A dependency tracks pre-releases only if its declared version already is
//! one. Otherwise only stable versions are candidates.

use super::compare::compare;
use std::cmp::Ordering;

/// Markers identifying a pre-release version (matched case-insensitively)
pub const PRE_RELEASE_MARKERS: [&str; 4] = ["alpha", "beta", "rc", "snapshot"];

/// Returns true if the version contains any pre-release marker
pub fn is_pre_release(version: &str) -> bool {
    let lower = version.to_lowercase();
    PRE_RELEASE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Keep only the candidates matching the declared version's release channel
pub fn filter_candidates<'a, S: AsRef<str>>(declared: &str, candidates: &'a [S]) -> Vec<&'a str> {
    let wants_pre_release = is_pre_release(declared);
    candidates
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| is_pre_release(v) == wants_pre_release)
        .collect()
}

/// Pick the highest candidate acceptable for the declared version.
///
/// Among candidates that compare equal the first one encountered wins.
pub fn select_latest<S: AsRef<str>>(declared: &str, candidates: &[S]) -> Option<String> {
    filter_candidates(declared, candidates)
        .into_iter()
        .reduce(|best, v| {
            if compare(best, v) == Ordering::Less {
                v
            } else {
                best
            }
        })
        .map(str::to_string)
}
