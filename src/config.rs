//! Check configuration
//!
//! The repository list, timeouts and client identifier are fixed defaults;
//! the CLI may replace the repository list as a whole.

use crate::error::ConfigError;
use reqwest::Url;
use std::time::Duration;

/// Maven Central
pub const MAVEN_CENTRAL_URL: &str = "https://repo1.maven.org/maven2";

/// Google's Maven repository (AndroidX, Play Services, AGP)
pub const GOOGLE_MAVEN_URL: &str = "https://dl.google.com/dl/android/maven2";

/// Gradle Plugin Portal Maven mirror
pub const GRADLE_PLUGIN_PORTAL_URL: &str = "https://plugins.gradle.org/m2";

/// Connect timeout per repository request
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Read timeout per repository request
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Client identifier sent with every request
pub const USER_AGENT: &str = concat!("catup/", env!("CARGO_PKG_VERSION"));

/// A remote Maven-style repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Display name used in logs and errors
    pub name: String,
    /// Base URL without a trailing slash
    pub base_url: String,
}

impl RepositoryConfig {
    /// Create a repository entry
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a repository entry from a user-supplied URL, named after its host
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidRepositoryUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidRepositoryUrl {
                url: url.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let name = match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => url.to_string(),
        };

        Ok(Self::new(name, url))
    }
}

/// Configuration for a version check run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Repositories in fallback order
    pub repositories: Vec<RepositoryConfig>,
    /// Connect timeout per request
    pub connect_timeout: Duration,
    /// Read timeout per request
    pub read_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            repositories: default_repositories(),
            connect_timeout: CONNECT_TIMEOUT,
            read_timeout: READ_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl CheckConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the repository list with user-supplied URLs (kept in order).
    /// An empty list keeps the defaults.
    pub fn with_repository_urls(mut self, urls: &[String]) -> Result<Self, ConfigError> {
        if urls.is_empty() {
            return Ok(self);
        }
        self.repositories = urls
            .iter()
            .map(|url| RepositoryConfig::from_url(url))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    /// Set both timeouts
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }
}

/// Maven Central, then Google Maven, then the Gradle Plugin Portal
pub fn default_repositories() -> Vec<RepositoryConfig> {
    vec![
        RepositoryConfig::new("Maven Central", MAVEN_CENTRAL_URL),
        RepositoryConfig::new("Google Maven", GOOGLE_MAVEN_URL),
        RepositoryConfig::new("Gradle Plugin Portal", GRADLE_PLUGIN_PORTAL_URL),
    ]
}
