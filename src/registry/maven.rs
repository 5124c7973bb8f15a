//! Maven repository metadata adapter
//!
//! Fetches `maven-metadata.xml` for a coordinate from a Maven-layout repository.
//! URL format: {base}/{group with '.' replaced by '/'}/{artifact}/maven-metadata.xml

use crate::config::RepositoryConfig;
use crate::domain::DependencyCoordinate;
use crate::error::RegistryError;
use crate::registry::metadata::parse_versions;
use crate::registry::{HttpClient, MetadataSource};
use async_trait::async_trait;
use tracing::debug;

/// File name of the per-artifact metadata document
const METADATA_FILE: &str = "maven-metadata.xml";

/// A single Maven-layout repository
pub struct MavenRepository {
    client: HttpClient,
    name: String,
    base_url: String,
}

impl MavenRepository {
    /// Create a repository adapter
    pub fn new(client: HttpClient, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create an adapter from a repository config entry
    pub fn from_config(client: HttpClient, config: &RepositoryConfig) -> Self {
        Self::new(client, &config.name, &config.base_url)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the metadata URL for a coordinate
    pub fn metadata_url(&self, coordinate: &DependencyCoordinate) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            coordinate.group_path(),
            coordinate.artifact,
            METADATA_FILE
        )
    }
}

#[async_trait]
impl MetadataSource for MavenRepository {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_versions(
        &self,
        coordinate: &DependencyCoordinate,
    ) -> Result<Vec<String>, RegistryError> {
        let url = self.metadata_url(coordinate);
        let module = coordinate.module();
        debug!("Checking repository: {}", url);

        let body = self.client.get_text(&url, &module, &self.name).await?;
        let versions = parse_versions(&body)
            .map_err(|message| RegistryError::invalid_response(&module, &self.name, message))?;

        debug!(
            "Found {} versions for {} in {}",
            versions.len(),
            module,
            self.name
        );

        Ok(versions)
    }
}
