//! The record shared by every classified error

use std::error::Error as StdError;
use std::fmt;

use super::correlation::CorrelationId;

/// Wrapped internal error; never shown to callers
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Status reported by a core that was never bound to a category
pub const UNCLASSIFIED_STATUS: u16 = 501;

/// Internal cause, call-site label, caller-safe message and correlation id
///
/// All fields are fixed at construction. `Display` renders the operator-facing
/// diagnostic line, `user_message` the caller-facing text; only the former
/// includes the cause.
#[derive(Debug)]
pub struct ErrorCore {
    cause: Option<Cause>,
    context: String,
    message: String,
    correlation_id: CorrelationId,
}

impl ErrorCore {
    /// Build a core with a freshly generated correlation id
    pub fn new(cause: Option<Cause>, message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            cause,
            context: context.into(),
            message: message.into(),
            correlation_id: CorrelationId::generate(),
        }
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Sentinel status; categories replace it
    pub fn status_code(&self) -> u16 {
        UNCLASSIFIED_STATUS
    }

    /// `"<message>\n<correlation-id>"`
    pub fn user_message(&self) -> String {
        format!("{}\n{}", self.message, self.correlation_id)
    }
}

impl fmt::Display for ErrorCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.correlation_id, self.context, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, "-{}", cause)?;
        }
        Ok(())
    }
}
