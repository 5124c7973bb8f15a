//! Dependency coordinate declared in a version catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// A library entry from `[libraries]` with its version already resolved
/// through the `[versions]` table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyCoordinate {
    /// Catalog-local key (e.g., `androidx-core-ktx`)
    pub key: String,
    /// Maven group id (e.g., `androidx.core`)
    pub group: String,
    /// Maven artifact id (e.g., `core-ktx`)
    pub artifact: String,
    /// Concrete version the alias points at
    pub declared_version: String,
}

impl DependencyCoordinate {
    /// Creates a new coordinate
    pub fn new(
        key: impl Into<String>,
        group: impl Into<String>,
        artifact: impl Into<String>,
        declared_version: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            group: group.into(),
            artifact: artifact.into(),
            declared_version: declared_version.into(),
        }
    }

    /// Creates a coordinate from a `group:artifact` module string.
    ///
    /// The split happens at the last colon, so groups that themselves contain
    /// colons are kept intact. Returns `None` when there is no colon or either
    /// side is empty.
    pub fn from_module(
        key: impl Into<String>,
        module: &str,
        declared_version: impl Into<String>,
    ) -> Option<Self> {
        let (group, artifact) = module.rsplit_once(':')?;
        if group.is_empty() || artifact.is_empty() {
            return None;
        }
        Some(Self::new(key, group, artifact, declared_version))
    }

    /// Returns `group:artifact`
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// Returns the group with dots turned into path separators
    /// (`com.example` → `com/example`)
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }
}

impl fmt::Display for DependencyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.group, self.artifact, self.declared_version)
    }
}
