//! Server configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT` and `SERVER_WORKERS` overrides
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::invalid("SERVER_PORT", port))?;
        }
        if let Some(workers) = lookup("SERVER_WORKERS") {
            self.workers = workers
                .parse()
                .map_err(|_| ConfigError::invalid("SERVER_WORKERS", workers))?;
        }
        Ok(())
    }
}
