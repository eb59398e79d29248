//! Domain-facing failure kinds and their fixed categories

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::category::Category;

/// Raised when a kind is requested by a label outside the taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown error kind: {label}")]
pub struct UnknownKind {
    pub label: String,
}

/// The closed set of failure kinds internal code may raise
///
/// Each kind is bound to exactly one [`Category`]; extending the taxonomy
/// means adding a variant and its row in [`ErrorKind::category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Request body or parameters could not be decoded
    MalformedInput,
    /// Resource already exists
    DuplicateResource,
    /// Request is well formed but not valid for the current state
    InvalidState,
    NotFound,
    /// Query against a database or upstream service failed
    #[serde(rename = "upstream-query-failure")]
    UpstreamQuery,
    /// Query against the cache failed
    #[serde(rename = "cache-query-failure")]
    CacheQuery,
    /// Hashing or encryption failed, typically on account passwords
    #[serde(rename = "encryption-failure")]
    Encryption,
    /// Access or refresh token has expired
    TokenExpired,
    /// Credentials did not match; no tokens are issued after this
    LoginFailure,
    /// Caller's role disallows the action
    InsufficientPrivilege,
    /// Database or cache connection could not be established
    ConnectionFailure,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 11] = [
        ErrorKind::MalformedInput,
        ErrorKind::DuplicateResource,
        ErrorKind::InvalidState,
        ErrorKind::NotFound,
        ErrorKind::UpstreamQuery,
        ErrorKind::CacheQuery,
        ErrorKind::Encryption,
        ErrorKind::TokenExpired,
        ErrorKind::LoginFailure,
        ErrorKind::InsufficientPrivilege,
        ErrorKind::ConnectionFailure,
    ];

    pub const fn category(self) -> Category {
        match self {
            ErrorKind::MalformedInput | ErrorKind::DuplicateResource | ErrorKind::InvalidState => {
                Category::BadRequest
            }
            ErrorKind::NotFound => Category::NotFound,
            ErrorKind::UpstreamQuery | ErrorKind::CacheQuery => Category::Gateway,
            ErrorKind::Encryption => Category::InternalServer,
            ErrorKind::TokenExpired | ErrorKind::LoginFailure => Category::Unauthorized,
            ErrorKind::InsufficientPrivilege => Category::Forbidden,
            ErrorKind::ConnectionFailure => Category::ServiceUnavailable,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::MalformedInput => "malformed-input",
            ErrorKind::DuplicateResource => "duplicate-resource",
            ErrorKind::InvalidState => "invalid-state",
            ErrorKind::NotFound => "not-found",
            ErrorKind::UpstreamQuery => "upstream-query-failure",
            ErrorKind::CacheQuery => "cache-query-failure",
            ErrorKind::Encryption => "encryption-failure",
            ErrorKind::TokenExpired => "token-expired",
            ErrorKind::LoginFailure => "login-failure",
            ErrorKind::InsufficientPrivilege => "insufficient-privilege",
            ErrorKind::ConnectionFailure => "connection-failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ErrorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownKind {
                label: s.to_string(),
            })
    }
}
