use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Number of trailing hex characters of a UUID kept as the correlation id
pub const CORRELATION_ID_LEN: usize = 12;

/// Short identifier linking a user-visible message to its log line
///
/// Taken from the tail of a random v4 UUID. Collisions are possible but
/// negligible at request volumes; the id is not a uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Draw a fresh identifier
    pub fn generate() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(simple[simple.len() - CORRELATION_ID_LEN..].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CorrelationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
