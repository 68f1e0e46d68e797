//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::config::parse_flag;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Stop the server when `q` is entered on stdin.
    #[serde(default = "default_true")]
    pub quit_key: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: true,
            quit_key: true,
        }
    }
}

impl TransportConfig {
    /// Create an HTTP transport config.
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("MATH_SERVER_HOST") {
            config.host = host;
        }

        if let Ok(port) = std::env::var("MATH_SERVER_PORT") {
            match port.trim().parse() {
                Ok(p) => config.port = p,
                Err(_) => warn!(
                    "Invalid MATH_SERVER_PORT {:?}, using default {}",
                    port, config.port
                ),
            }
        }

        if let Ok(cors) = std::env::var("MATH_SERVER_CORS") {
            config.enable_cors = parse_flag(&cors);
        }

        if let Ok(quit_key) = std::env::var("MATH_SERVER_QUIT_KEY") {
            config.quit_key = parse_flag(&quit_key);
        }

        config
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
