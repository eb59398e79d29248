//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `errors` - How unclassified failures are surfaced to callers
//! - `server` - HTTP server bind configuration

pub mod environment;
pub mod errors;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use errors::{ErrorHandlingConfig, FallbackPolicy};
pub use server::ServerConfig;

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Error handling configuration
    #[serde(default)]
    pub errors: ErrorHandlingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Defaults for the given environment, without reading any variables
    pub fn for_environment(env: Environment) -> Self {
        Self {
            environment: env,
            server: ServerConfig::default(),
            logging: LoggingConfig::for_environment(env),
            errors: ErrorHandlingConfig::for_environment(env),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Environment::from_lookup(&lookup)?;
        let mut config = Self::for_environment(env);
        config.server.apply_overrides(&lookup)?;
        config.logging.apply_overrides(&lookup)?;
        config.errors.apply_overrides(&lookup)?;
        Ok(config)
    }
}

/// Parse a boolean flag the way operators usually write them
pub(crate) fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}
