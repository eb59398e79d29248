//! Error taxonomy, factory and digest.
//!
//! - `base` - the shared record (cause, context, message, correlation id)
//! - `category` - status classifications
//! - `kind` - domain-facing kinds and their category table
//! - `errx` - the classified value, the `ErrorValue` contract and the factory
//! - `sink` - logging sink capability
//! - `digest` - the request-terminating boundary

mod base;
mod category;
mod correlation;
mod digest;
mod errx;
mod kind;
mod sink;

#[cfg(test)]
mod tests;

pub use base::{Cause, ErrorCore, UNCLASSIFIED_STATUS};
pub use category::Category;
pub use correlation::{CorrelationId, CORRELATION_ID_LEN};
pub use digest::{
    digest_err, find_classified, Digester, Disposition, RequestContext,
    UNCLASSIFIED_FALLBACK_STATUS,
};
pub use errx::{new_err, new_err_named, new_err_or_fallback, Classify, ErrorValue, Errx};
pub use kind::{ErrorKind, UnknownKind};
pub use sink::{LogSink, MemorySink, TracingSink};

pub use errx_shared::{FallbackPolicy, MessageBody};
