//! Numeric-segment version ordering
//!
//! Versions are split on `.`, `-` and the literal pre-release words
//! `alpha`, `beta`, `rc`, `snapshot`. Every segment becomes a 32-bit signed
//! integer, with anything unparseable (empty, alphabetic, above `i32::MAX`)
//! counting as 0.
//! The shorter sequence is padded with zeros before a positional comparison.
//!
//! Not semver: `1.0.0-alpha` and `1.0.0-beta` compare equal since both
//! qualifiers collapse to 0.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

// Case-sensitive: `RC1` survives as a single non-numeric segment
static SEGMENT_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.|-|alpha|beta|rc|snapshot").unwrap());

/// Split a version into its integer segments
pub fn segments(version: &str) -> Vec<i32> {
    SEGMENT_DELIMITERS
        .split(version)
        .map(|part| part.parse().unwrap_or(0))
        .collect()
}

/// Compare two version strings
pub fn compare(a: &str, b: &str) -> Ordering {
    let parts_a = segments(a);
    let parts_b = segments(b);
    let len = parts_a.len().max(parts_b.len());

    for i in 0..len {
        let pa = parts_a.get(i).copied().unwrap_or(0);
        let pb = parts_b.get(i).copied().unwrap_or(0);
        match pa.cmp(&pb) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Returns true iff `a >= b`
pub fn is_at_least(a: &str, b: &str) -> bool {
    compare(a, b) != Ordering::Less
}

/// Returns true if `declared` does not trail `latest`.
///
/// A declared version newer than `latest` counts as up to date; this happens
/// when a pre-release is declared that the repository's filtered pool ranks lower.
pub fn is_up_to_date(declared: &str, latest: &str) -> bool {
    is_at_least(declared, latest)
}
