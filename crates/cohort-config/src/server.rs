//! HTTP server configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default listen port.
const fn default_port() -> u16 {
    5005
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Local frontend dev servers allowed to call the API cross-origin.
fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

fn default_docs_page() -> String {
    "views/docs.html".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins that receive CORS allow headers. Every other origin is refused.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// HTML page served at `/docs`.
    #[serde(default = "default_docs_page")]
    pub docs_page: String,

    /// Directory served for paths no route matches.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            docs_page: default_docs_page(),
            public_dir: default_public_dir(),
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.host".into(),
            reason: format!("'{}' is not an IP address: {e}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
