//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with locating or reading the version catalog
//! - RegistryError: A single repository failing to answer for a coordinate
//! - ResolveError: Every repository in the fallback chain missed
//! - ConfigError: Issues with CLI configuration
//! - CheckError: Failures in the check scaffolding itself (fatal for the batch)

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to the version catalog file
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a TOML file
    #[error("not a TOML version catalog: {path} (please open a .toml file)")]
    NotToml { path: PathBuf },

    /// A directory was given but no catalog was found inside it
    #[error("no libs.versions.toml found in {path}")]
    NoCatalogInDirectory { path: PathBuf },
}

/// Errors from a single repository while looking up one coordinate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Repository has no metadata for the coordinate (HTTP 404)
    #[error("'{coordinate}' not found in {repository}")]
    NotFound {
        coordinate: String,
        repository: String,
    },

    /// Repository answered but no listed version fits the release channel
    #[error("no acceptable version of '{coordinate}' in {repository}")]
    NoUsableVersion {
        coordinate: String,
        repository: String,
    },

    /// Repository answered with a non-200 status other than 404
    #[error("{repository} returned HTTP {status} for '{coordinate}'")]
    HttpStatus {
        coordinate: String,
        repository: String,
        status: u16,
    },

    /// Request timed out (connect or read)
    #[error("timeout while fetching '{coordinate}' from {repository}")]
    Timeout {
        coordinate: String,
        repository: String,
    },

    /// Network request failed
    #[error("failed to fetch '{coordinate}' from {repository}: {message}")]
    Network {
        coordinate: String,
        repository: String,
        message: String,
    },

    /// Response body was not a usable metadata document
    #[error("invalid metadata from {repository} for '{coordinate}': {message}")]
    InvalidResponse {
        coordinate: String,
        repository: String,
        message: String,
    },
}

/// Errors when no repository in the fallback chain yields a usable version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every repository either lacked the coordinate or had no acceptable version
    #[error("no usable version found for '{coordinate}'")]
    NotFound { coordinate: String },

    /// At least one repository failed for a reason other than "not found"
    #[error("lookup failed for '{coordinate}': {}", summarize(.misses))]
    LookupFailed {
        coordinate: String,
        misses: Vec<RegistryError>,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Repository base URL could not be parsed
    #[error("invalid repository URL '{url}': {message}")]
    InvalidRepositoryUrl { url: String, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Fatal errors in the check scaffolding
#[derive(Error, Debug)]
pub enum CheckError {
    /// Failed to create the HTTP client
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },

    /// The background check task panicked or was aborted
    #[error("check task failed: {message}")]
    TaskFailed { message: String },
}

fn summarize(misses: &[RegistryError]) -> String {
    misses
        .iter()
        .filter(|m| !m.is_not_found())
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new NotToml error
    pub fn not_toml(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotToml { path: path.into() }
    }
}

impl RegistryError {
    /// Creates a new NotFound error
    pub fn not_found(coordinate: impl Into<String>, repository: impl Into<String>) -> Self {
        RegistryError::NotFound {
            coordinate: coordinate.into(),
            repository: repository.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        coordinate: impl Into<String>,
        repository: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::Network {
            coordinate: coordinate.into(),
            repository: repository.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(coordinate: impl Into<String>, repository: impl Into<String>) -> Self {
        RegistryError::Timeout {
            coordinate: coordinate.into(),
            repository: repository.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        coordinate: impl Into<String>,
        repository: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            coordinate: coordinate.into(),
            repository: repository.into(),
            message: message.into(),
        }
    }

    /// Creates a new NoUsableVersion error
    pub fn no_usable_version(coordinate: impl Into<String>, repository: impl Into<String>) -> Self {
        RegistryError::NoUsableVersion {
            coordinate: coordinate.into(),
            repository: repository.into(),
        }
    }

    /// Returns true if the repository answered cleanly but had nothing to offer
    /// (404 or an empty candidate pool), as opposed to failing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFound { .. } | RegistryError::NoUsableVersion { .. }
        )
    }
}

impl ResolveError {
    /// Builds the error for a finished fallback chain.
    ///
    /// Misses that are all "not found" collapse into `NotFound`; anything else
    /// is kept as a `LookupFailed` with the per-repository reasons.
    pub fn from_misses(coordinate: impl Into<String>, misses: Vec<RegistryError>) -> Self {
        let coordinate = coordinate.into();
        if misses.iter().all(RegistryError::is_not_found) {
            ResolveError::NotFound { coordinate }
        } else {
            ResolveError::LookupFailed { coordinate, misses }
        }
    }
}
