//! Logging sink capability
//!
//! Error values never reach for a global logger; the digest hands them the
//! sink to write to. [`TracingSink`] is what servers use, [`MemorySink`]
//! records lines for assertions.

use std::sync::{Mutex, MutexGuard};

/// Destination for diagnostic lines. Must tolerate concurrent writers.
pub trait LogSink: Send + Sync {
    /// Record `message` at error severity
    fn error(&self, message: &str);
}

/// Forwards diagnostic lines to `tracing` under the `errx` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!(target: "errx", "{}", message);
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        // A panicking writer cannot leave the Vec half-pushed.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn error(&self, message: &str) {
        self.guard().push(message.to_string());
    }
}
