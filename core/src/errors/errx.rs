//! Classified error values and the factory that builds them

use std::error::Error as StdError;
use std::fmt;

use super::base::{Cause, ErrorCore};
use super::category::Category;
use super::correlation::CorrelationId;
use super::kind::{ErrorKind, UnknownKind};
use super::sink::LogSink;

/// Capability set every classified error exposes to the digest
///
/// `Display` (via `Error`) is the internal diagnostic line. It may contain the
/// wrapped cause and must never be sent to a caller; `user_message` is the
/// only text meant for callers.
pub trait ErrorValue: StdError + Send + Sync {
    /// Transport status code
    fn status_code(&self) -> u16;

    /// Caller-safe message carrying the correlation id
    fn user_message(&self) -> String;

    /// Write the diagnostic line to `sink` at error severity
    ///
    /// Each call writes one record.
    fn log(&self, sink: &dyn LogSink) {
        sink.error(&self.to_string());
    }
}

/// A failure bound to an [`ErrorKind`] and, through it, to a [`Category`]
#[derive(Debug)]
pub struct Errx {
    kind: ErrorKind,
    category: Category,
    core: ErrorCore,
}

impl Errx {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn core(&self) -> &ErrorCore {
        &self.core
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        self.core.correlation_id()
    }
}

impl ErrorValue for Errx {
    fn status_code(&self) -> u16 {
        self.category.status_code()
    }

    fn user_message(&self) -> String {
        self.core.user_message()
    }
}

impl fmt::Display for Errx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.core, f)
    }
}

impl StdError for Errx {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.core
            .cause()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Build a classified error of `kind` wrapping `cause`
///
/// Every call draws a new correlation id, so two errors built from the same
/// inputs are still told apart in the logs.
///
/// ```
/// use errx_core::{new_err, ErrorKind, ErrorValue};
///
/// let err = new_err(ErrorKind::NotFound, None, "resource missing", "UserService.get");
/// assert_eq!(err.status_code(), 404);
/// assert!(err.user_message().starts_with("resource missing\n"));
/// ```
pub fn new_err(
    kind: ErrorKind,
    cause: Option<Cause>,
    user_message: impl Into<String>,
    context: impl Into<String>,
) -> Errx {
    Errx {
        kind,
        category: kind.category(),
        core: ErrorCore::new(cause, user_message, context),
    }
}

/// Build a classified error from a kind label such as `"token-expired"`
///
/// Returns `None` for labels outside the taxonomy. Callers must handle that
/// case themselves, typically by digesting an [`UnknownKind`](super::UnknownKind)
/// so the request still terminates on the unclassified path.
pub fn new_err_named(
    label: &str,
    cause: Option<Cause>,
    user_message: impl Into<String>,
    context: impl Into<String>,
) -> Option<Errx> {
    let kind = label.parse::<ErrorKind>().ok()?;
    Some(new_err(kind, cause, user_message, context))
}

/// Like [`new_err_named`], but an unknown label yields an [`UnknownKind`]
///
/// The result is always an error value. A known label gives the boxed
/// [`Errx`]; an unknown one gives an unclassified error that the digest sends
/// down its 500 fallback. `cause` is dropped in that case.
pub fn new_err_or_fallback(
    label: &str,
    cause: Option<Cause>,
    user_message: impl Into<String>,
    context: impl Into<String>,
) -> Cause {
    match new_err_named(label, cause, user_message, context) {
        Some(err) => Box::new(err),
        None => Box::new(UnknownKind {
            label: label.to_string(),
        }),
    }
}

/// Classify the error side of a `Result` at the point of failure
pub trait Classify<T> {
    fn classify(
        self,
        kind: ErrorKind,
        user_message: impl Into<String>,
        context: impl Into<String>,
    ) -> Result<T, Errx>;
}

impl<T, E> Classify<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn classify(
        self,
        kind: ErrorKind,
        user_message: impl Into<String>,
        context: impl Into<String>,
    ) -> Result<T, Errx> {
        self.map_err(|err| new_err(kind, Some(err.into()), user_message, context))
    }
}
