//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address, the API key
//! clients must present, and CORS settings. The key is injected here at
//! startup and never hardcoded in the serving layer.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bearer key clients must present on /api/quote (required)
    pub api_key: String,

    /// CORS allowed origins (default: none configured, permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl HttpServerConfig {
    /// Create a config with defaults and the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: api_key.into(),
            cors_origins: Vec::new(),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
