//! actix-web side of the digest boundary

use actix_web::{http::StatusCode, HttpResponse};
use errx_core::{Digester, MessageBody, RequestContext};
use serde::Serialize;
use std::error::Error as StdError;

/// Request context backed by an actix-web response
///
/// The first abort builds the JSON response; later aborts are ignored so a
/// request is terminated exactly once.
#[derive(Default)]
pub struct HttpContext {
    response: Option<HttpResponse>,
}

impl std::fmt::Debug for HttpContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpContext")
            .field("aborted", &self.is_aborted())
            .finish()
    }
}

impl HttpContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_aborted(&self) -> bool {
        self.response.is_some()
    }

    /// The response written by the abort, if any
    pub fn into_response(self) -> Option<HttpResponse> {
        self.response
    }
}

impl RequestContext for HttpContext {
    fn abort_with_json(&mut self, status: u16, body: MessageBody) {
        if self.response.is_some() {
            tracing::warn!(status, "request already aborted, ignoring second abort");
            return;
        }
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.response = Some(HttpResponse::build(status).json(body));
    }
}

/// Digest `err` and return the response it produced
pub fn digest_response(err: &(dyn StdError + 'static), digester: &Digester) -> HttpResponse {
    let mut ctx = HttpContext::new();
    digester.digest(Some(err), &mut ctx);
    ctx.into_response()
        .unwrap_or_else(|| HttpResponse::InternalServerError().finish())
}

/// `200` with `value` as JSON, or the digested error
pub fn respond_json<T, E>(result: Result<T, E>, digester: &Digester) -> HttpResponse
where
    T: Serialize,
    E: StdError + 'static,
{
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(err) => digest_response(&err, digester),
    }
}
