//! Repository adapters for fetching published versions
//!
//! This module provides:
//! - HTTP client shared foundation with bounded timeouts
//! - maven-metadata.xml parsing
//! - Maven-layout repository adapter
//! - Ordered fallback resolver across repositories

mod client;
mod maven;
mod metadata;
mod resolver;

pub use client::HttpClient;
pub use maven::MavenRepository;
pub use metadata::parse_versions;
pub use resolver::VersionResolver;

use crate::domain::DependencyCoordinate;
use crate::error::RegistryError;
use async_trait::async_trait;

/// A remote source of published versions for a coordinate
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Display name used in logs and errors
    fn name(&self) -> &str;

    /// Fetch every listed version, in the order the source lists them
    async fn fetch_versions(
        &self,
        coordinate: &DependencyCoordinate,
    ) -> Result<Vec<String>, RegistryError>;
}
