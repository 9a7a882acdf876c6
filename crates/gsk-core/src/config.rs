//! Connection settings for the analysis server client.

use std::time::Duration;

use crate::error::{Error, Result};

/// Server used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Configuration for [`HttpClient`](crate::network::HttpClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the analysis server, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Total attempts for a request, including the first one
    pub max_retries: u32,
    /// Delay before the first retry, doubled on each further retry
    pub initial_backoff: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    initial_backoff: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Set the server base URL
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the total number of attempts per request
    pub fn max_retries(mut self, attempts: u32) -> Self {
        self.max_retries = Some(attempts);
        self
    }

    /// Set the delay before the first retry
    pub fn initial_backoff(mut self, delay: Duration) -> Self {
        self.initial_backoff = Some(delay);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig> {
        let default = ClientConfig::default();

        let base_url = self
            .base_url
            .unwrap_or(default.base_url)
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "server URL must start with http:// or https://, got {:?}",
                base_url
            )));
        }

        let max_retries = self.max_retries.unwrap_or(default.max_retries);
        if max_retries == 0 {
            return Err(Error::Config("max_retries must be at least 1".to_string()));
        }

        let timeout = self.timeout.unwrap_or(default.timeout);
        if timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }

        Ok(ClientConfig {
            base_url,
            timeout,
            max_retries,
            initial_backoff: self.initial_backoff.unwrap_or(default.initial_backoff),
        })
    }
}
