//! Client configuration.
//!
//! Values come from the environment, with defaults that match the backend
//! started locally on its default port.

use std::env;
use std::time::Duration;

/// Where the backend lives and how long the terminal waits for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the item collection, always ending in `/`
    ///
    /// Default: `http://localhost:8080/todos/`
    pub api_url: String,

    /// How long the terminal waits for a request before redrawing anyway.
    /// Requests are not cancelled when this expires.
    ///
    /// Default: 10 seconds
    pub wait_timeout: Duration,
}

impl ClientConfig {
    /// Base URL used when `TODO_API_URL` is not set
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8080/todos/";

    /// Configuration pointing at `api_url`
    ///
    /// A missing trailing slash is added so item URLs can be joined onto it.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }

        Self {
            api_url,
            wait_timeout: Duration::from_secs(10),
        }
    }

    /// Set the terminal wait timeout
    #[must_use]
    pub const fn with_wait_timeout(mut self, wait_timeout: Duration) -> Self {
        self.wait_timeout = wait_timeout;
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `TODO_API_URL`: base URL of the item collection
    /// - `TODO_WAIT_TIMEOUT_SECS`: terminal wait timeout in seconds
    #[must_use]
    pub fn from_env() -> Self {
        let api_url = env::var("TODO_API_URL").unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string());
        let wait_timeout = env::var("TODO_WAIT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(Duration::from_secs(10), Duration::from_secs);

        Self::new(api_url).with_wait_timeout(wait_timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_URL)
    }
}
