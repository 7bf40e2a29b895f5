//! Server configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `HOST` (default `0.0.0.0`)
    /// - `PORT` (default `8080`)
    /// - `RUST_LOG` (default `todo_server=info,tower_http=info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_level: env::var("RUST_LOG")
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".to_string()),
        }
    }

    /// Address string to bind, `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "todo_server=info,tower_http=info".to_string(),
        }
    }
}
