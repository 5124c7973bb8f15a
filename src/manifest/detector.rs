//! Version catalog location and input validation
//!
//! Features:
//! - Accepts a catalog file path directly
//! - Searches a project directory for `gradle/libs.versions.toml` or `libs.versions.toml`
//! - Rejects non-TOML inputs up front

use crate::error::ManifestError;
use std::path::{Path, PathBuf};

/// Conventional catalog file name
pub const CATALOG_FILENAME: &str = "libs.versions.toml";

/// Candidate locations relative to a project directory, in lookup order
const CATALOG_LOCATIONS: [&str; 2] = ["gradle/libs.versions.toml", "libs.versions.toml"];

/// Find the version catalog for a path.
///
/// A directory is searched for the conventional locations; a file is accepted
/// only if it has a `.toml` extension.
pub fn locate_catalog(path: &Path) -> Result<PathBuf, ManifestError> {
    if path.is_dir() {
        return CATALOG_LOCATIONS
            .iter()
            .map(|candidate| path.join(candidate))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ManifestError::NoCatalogInDirectory {
                path: path.to_path_buf(),
            });
    }

    ensure_toml(path)?;

    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    Ok(path.to_path_buf())
}

/// Reject anything that is not a `.toml` file
pub fn ensure_toml(path: &Path) -> Result<(), ManifestError> {
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        Ok(())
    } else {
        Err(ManifestError::not_toml(path))
    }
}

/// Locate and read a version catalog
pub fn read_catalog(path: &Path) -> Result<(PathBuf, String), ManifestError> {
    let path = locate_catalog(path)?;
    let content =
        std::fs::read_to_string(&path).map_err(|e| ManifestError::read_error(&path, e))?;
    Ok((path, content))
}
