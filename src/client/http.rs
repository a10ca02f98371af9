//! HTTP client abstraction for explorer API requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::FinderError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header carrying the optional explorer API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// API key sent with every request, if set
    pub api_key: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `FinderError::ClientInit` if the underlying client fails to
    /// build (e.g., TLS backend unavailable).
    pub fn with_config(config: HttpConfig) -> Result<Self, FinderError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FinderError::client_init(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout);

        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        request
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_blank_api_key_is_dropped() {
        let config = HttpConfig::with_timeout(Duration::from_secs(3)).api_key(Some("  ".into()));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_get_sets_headers() {
        let client =
            HttpClient::with_config(HttpConfig::default().api_key(Some("secret".into()))).unwrap();
        let request = client.get("http://localhost/api/blocks/1").build().unwrap();

        assert_eq!(request.headers()["accept"], "application/json");
        assert_eq!(request.headers()[API_KEY_HEADER], "secret");
        assert_eq!(request.timeout(), Some(&client.config().timeout));
    }
}
