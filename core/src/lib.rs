//! # Errx Core
//!
//! Typed error classification for request-handling services.
//! Internal code picks an [`ErrorKind`] once through [`new_err`]; the resulting
//! [`Errx`] travels up the call chain as an ordinary error until the handler
//! passes it to a [`Digester`], which logs the diagnostic line and terminates
//! the request with a classified status and a redacted message.

pub mod errors;

// Re-export commonly used types for convenience
pub use errors::*;
