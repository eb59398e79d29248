//! Shared configuration and wire types for the errx workspace
//!
//! This crate provides the pieces used by both the core and the HTTP layer:
//! - Configuration types (environment, logging, server, error handling)
//! - The JSON message body written for every terminated request
//! - Health check response types

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, ErrorHandlingConfig, FallbackPolicy, LogFormat,
    LoggingConfig, ServerConfig,
};
pub use types::{HealthResponse, HealthStatus, MessageBody};
