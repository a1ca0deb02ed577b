//! HTTP client wrapper for registry requests
//!
//! Wraps `reqwest::Client` with a bounded timeout and a stable
//! user-agent. Requests are made exactly once; a failed request is
//! reported, never retried.

use crate::error::ResolveError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upper bound on any single registry request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-agent sent with every registry request
pub const DEFAULT_USER_AGENT: &str = concat!("depfresh/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for registry adapters
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Creates a client with the default timeout and user-agent
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Creates a client with an explicit timeout and user-agent
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ResolveError::network_error("-", "-", e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches `url` and decodes the response body as JSON
    ///
    /// `package` and `registry` only label the resulting error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
        registry: &str,
    ) -> Result<T, ResolveError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ResolveError::timeout(package, registry)
            } else {
                ResolveError::network_error(package, registry, e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ResolveError::package_not_found(package, registry));
        }

        if !response.status().is_success() {
            return Err(ResolveError::network_error(
                package,
                registry,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ResolveError::invalid_response(package, registry, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_user_agent_carries_crate_version() {
        assert!(DEFAULT_USER_AGENT.starts_with("depfresh/"));
        assert!(DEFAULT_USER_AGENT.len() > "depfresh/".len());
    }

    #[test]
    fn test_client_builds_with_custom_config() {
        let client = HttpClient::with_config(Duration::from_secs(5), "test-agent/1.0");
        assert!(client.is_ok());
    }
}
