//! Error surfacing configuration

use serde::{Deserialize, Serialize};

use super::{parse_flag, ConfigError, Environment};

/// Message returned for unclassified failures when their text is redacted
pub const DEFAULT_GENERIC_MESSAGE: &str = "An internal error occurred";

/// What the caller sees when a failure was never classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Replace the raw error text with a generic message and a correlation id
    #[default]
    Redact,
    /// Send the raw error text as the response message
    Expose,
}

/// Error handling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorHandlingConfig {
    /// Policy for errors that carry no classification
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Message shown to callers for redacted unclassified failures
    #[serde(default = "default_generic_message")]
    pub generic_message: String,

    /// Mount the error probe route
    #[serde(default)]
    pub probe_enabled: bool,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::Redact,
            generic_message: default_generic_message(),
            probe_enabled: false,
        }
    }
}

impl ErrorHandlingConfig {
    /// Create error handling config for environment
    pub fn for_environment(env: Environment) -> Self {
        Self {
            probe_enabled: env.is_development(),
            ..Default::default()
        }
    }

    /// Apply `ERRX_EXPOSE_UNCLASSIFIED`, `ERRX_GENERIC_MESSAGE` and `ERRX_PROBE_ENABLED`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ERRX_EXPOSE_UNCLASSIFIED") {
            self.fallback = if parse_flag("ERRX_EXPOSE_UNCLASSIFIED", &value)? {
                FallbackPolicy::Expose
            } else {
                FallbackPolicy::Redact
            };
        }
        if let Some(message) = lookup("ERRX_GENERIC_MESSAGE") {
            if message.trim().is_empty() {
                return Err(ConfigError::invalid("ERRX_GENERIC_MESSAGE", message));
            }
            self.generic_message = message;
        }
        if let Some(value) = lookup("ERRX_PROBE_ENABLED") {
            self.probe_enabled = parse_flag("ERRX_PROBE_ENABLED", &value)?;
        }
        Ok(())
    }
}

fn default_generic_message() -> String {
    String::from(DEFAULT_GENERIC_MESSAGE)
}
