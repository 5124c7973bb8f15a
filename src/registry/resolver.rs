//! Repository fallback chain
//!
//! Repositories are tried strictly in order. The first one whose metadata
//! yields a non-empty candidate pool decides the latest version; later
//! repositories are never contacted for that coordinate.

use crate::config::CheckConfig;
use crate::domain::DependencyCoordinate;
use crate::error::{RegistryError, ResolveError};
use crate::registry::{HttpClient, MavenRepository, MetadataSource};
use crate::update::select_latest;
use tracing::{debug, info};

/// Resolves the newest acceptable version of a coordinate
pub struct VersionResolver {
    sources: Vec<Box<dyn MetadataSource>>,
}

impl VersionResolver {
    /// Create a resolver over the given sources, in fallback order
    pub fn new(sources: Vec<Box<dyn MetadataSource>>) -> Self {
        Self { sources }
    }

    /// Create a resolver over the configured Maven repositories
    pub fn from_config(config: &CheckConfig, client: HttpClient) -> Self {
        let sources = config
            .repositories
            .iter()
            .map(|repo| {
                Box::new(MavenRepository::from_config(client.clone(), repo))
                    as Box<dyn MetadataSource>
            })
            .collect();
        Self::new(sources)
    }

    /// Names of the sources in fallback order
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Resolve the latest version for a coordinate.
    ///
    /// Individual repository failures are recorded and skipped; only when the
    /// whole chain misses is an error returned.
    pub async fn resolve(&self, coordinate: &DependencyCoordinate) -> Result<String, ResolveError> {
        let module = coordinate.module();
        let mut misses = Vec::new();

        for source in &self.sources {
            match source.fetch_versions(coordinate).await {
                Ok(versions) => match select_latest(&coordinate.declared_version, &versions) {
                    Some(latest) => {
                        info!("Latest version of {} is {} ({})", module, latest, source.name());
                        return Ok(latest);
                    }
                    None => {
                        debug!(
                            "{} listed {} versions for {} but none are acceptable",
                            source.name(),
                            versions.len(),
                            module
                        );
                        misses.push(RegistryError::no_usable_version(&module, source.name()));
                    }
                },
                Err(e) => {
                    debug!("Repository miss: {}", e);
                    misses.push(e);
                }
            }
        }

        Err(ResolveError::from_misses(module, misses))
    }
}
