//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Bounded connect and read timeouts
//! - A fixed User-Agent identifying the checker
//! - Status and transport errors mapped onto `RegistryError`
//!
//! Requests are not retried: a slow repository may cost at most one
//! connect timeout plus one read timeout before the next one is tried.

use crate::config::{CheckConfig, CONNECT_TIMEOUT, READ_TIMEOUT, USER_AGENT};
use crate::error::RegistryError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// HTTP client wrapper for repository metadata requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(CONNECT_TIMEOUT, READ_TIMEOUT, USER_AGENT)
    }

    /// Create a client from a check configuration
    pub fn from_config(config: &CheckConfig) -> Result<Self, reqwest::Error> {
        Self::with_config(
            config.connect_timeout,
            config.read_timeout,
            &config.user_agent,
        )
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(
        connect_timeout: Duration,
        read_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// GET a URL and return the body, treating anything but 200 as a miss
    pub async fn get_text(
        &self,
        url: &str,
        coordinate: &str,
        repository: &str,
    ) -> Result<String, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(e, coordinate, repository))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                return Err(RegistryError::not_found(coordinate, repository));
            }
            status => {
                return Err(RegistryError::HttpStatus {
                    coordinate: coordinate.to_string(),
                    repository: repository.to_string(),
                    status: status.as_u16(),
                });
            }
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(e, coordinate, repository))
    }
}

fn transport_error(error: reqwest::Error, coordinate: &str, repository: &str) -> RegistryError {
    if error.is_timeout() {
        RegistryError::timeout(coordinate, repository)
    } else {
        RegistryError::network(coordinate, repository, error.to_string())
    }
}
