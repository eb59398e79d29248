//! Terminal conversion of errors into logged, classified request aborts

use std::error::Error as StdError;
use std::sync::Arc;

use errx_shared::{ErrorHandlingConfig, FallbackPolicy, MessageBody};
use errx_shared::config::errors::DEFAULT_GENERIC_MESSAGE;
use once_cell::sync::Lazy;

use super::correlation::CorrelationId;
use super::errx::{ErrorValue, Errx};
use super::sink::{LogSink, TracingSink};

/// Status used for errors that carry no classification
pub const UNCLASSIFIED_FALLBACK_STATUS: u16 = 500;

/// Transport-side handle of the request being processed
///
/// Implementations write the response and stop any further processing of the
/// request. The digest calls `abort_with_json` at most once per failure.
pub trait RequestContext {
    fn abort_with_json(&mut self, status: u16, body: MessageBody);
}

/// What the handler should do after a digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// No error; keep processing the request
    Continue = 0,
    /// The request has been terminated; return immediately
    Aborted = 1,
}

impl Disposition {
    /// `0` to continue, `1` when the request was aborted
    pub fn as_signal(self) -> i32 {
        self as i32
    }

    pub fn is_aborted(self) -> bool {
        matches!(self, Disposition::Aborted)
    }
}

static DEFAULT_DIGESTER: Lazy<Digester> = Lazy::new(Digester::default);

/// Digest `err` with the tracing sink and the redacting fallback
pub fn digest_err<C>(err: Option<&(dyn StdError + 'static)>, ctx: &mut C) -> Disposition
where
    C: RequestContext + ?Sized,
{
    DEFAULT_DIGESTER.digest(err, ctx)
}

/// The single boundary between failures and the transport
#[derive(Clone)]
pub struct Digester {
    sink: Arc<dyn LogSink>,
    fallback: FallbackPolicy,
    generic_message: String,
}

impl Default for Digester {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl std::fmt::Debug for Digester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digester")
            .field("fallback", &self.fallback)
            .field("generic_message", &self.generic_message)
            .finish_non_exhaustive()
    }
}

impl Digester {
    /// Digester writing to `sink` with the redacting fallback
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            fallback: FallbackPolicy::default(),
            generic_message: String::from(DEFAULT_GENERIC_MESSAGE),
        }
    }

    pub fn from_config(config: &ErrorHandlingConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            fallback: config.fallback,
            generic_message: config.generic_message.clone(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_generic_message(mut self, message: impl Into<String>) -> Self {
        self.generic_message = message.into();
        self
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Log `err` and terminate `ctx` accordingly
    ///
    /// - `None`: nothing is logged, `ctx` is untouched, returns `Continue`.
    /// - A classified error (the error itself or any error in its source
    ///   chain): logged once, aborted with its status and user message.
    /// - Anything else: logged once, aborted with 500. The body holds the raw
    ///   text under [`FallbackPolicy::Expose`], the generic message and a
    ///   correlation id under [`FallbackPolicy::Redact`].
    pub fn digest<C>(&self, err: Option<&(dyn StdError + 'static)>, ctx: &mut C) -> Disposition
    where
        C: RequestContext + ?Sized,
    {
        let Some(err) = err else {
            return Disposition::Continue;
        };

        if let Some(classified) = err.downcast_ref::<Errx>() {
            return self.digest_classified(classified, ctx);
        }
        match find_classified(err) {
            Some(classified) => self.digest_wrapped(err, classified, ctx),
            None => self.digest_unclassified(err, ctx),
        }
    }

    /// Digest a value already known to carry a classification
    pub fn digest_classified<C>(&self, err: &dyn ErrorValue, ctx: &mut C) -> Disposition
    where
        C: RequestContext + ?Sized,
    {
        err.log(self.sink.as_ref());
        ctx.abort_with_json(err.status_code(), MessageBody::new(err.user_message()));
        Disposition::Aborted
    }

    /// The log line keeps the outer error's text next to the classified
    /// diagnostic; status and body come from the classified error.
    fn digest_wrapped<C>(
        &self,
        outer: &(dyn StdError + 'static),
        classified: &Errx,
        ctx: &mut C,
    ) -> Disposition
    where
        C: RequestContext + ?Sized,
    {
        self.sink.error(&format!("{} (wrapped by: {})", classified, outer));
        ctx.abort_with_json(
            classified.status_code(),
            MessageBody::new(classified.user_message()),
        );
        Disposition::Aborted
    }

    fn digest_unclassified<C>(&self, err: &(dyn StdError + 'static), ctx: &mut C) -> Disposition
    where
        C: RequestContext + ?Sized,
    {
        let body = match self.fallback {
            FallbackPolicy::Expose => {
                self.sink.error(&err.to_string());
                MessageBody::new(err.to_string())
            }
            FallbackPolicy::Redact => {
                let id = CorrelationId::generate();
                self.sink.error(&format!("{}:unclassified: {}", id, err));
                MessageBody::new(format!("{}\n{}", self.generic_message, id))
            }
        };
        ctx.abort_with_json(UNCLASSIFIED_FALLBACK_STATUS, body);
        Disposition::Aborted
    }
}

/// First [`Errx`] found walking from `err` down its source chain
pub fn find_classified<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Errx> {
    let mut current = Some(err);
    while let Some(candidate) = current {
        if let Some(classified) = candidate.downcast_ref::<Errx>() {
            return Some(classified);
        }
        current = candidate.source();
    }
    None
}
