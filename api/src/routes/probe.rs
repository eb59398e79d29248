//! Error probe: lets operators see the envelope every kind produces

use actix_web::{web, HttpResponse};
use errx_core::{new_err_or_fallback, Category, Cause, Digester, ErrorKind};
use serde::Serialize;

use crate::handlers::digest_response;

#[derive(Debug, Serialize)]
pub struct KindInfo {
    pub kind: ErrorKind,
    pub category: Category,
    pub status: u16,
}

/// `GET /api/v1/probe`: the taxonomy with categories and statuses
pub async fn list_kinds() -> HttpResponse {
    let kinds: Vec<KindInfo> = ErrorKind::ALL
        .into_iter()
        .map(|kind| KindInfo {
            kind,
            category: kind.category(),
            status: kind.category().status_code(),
        })
        .collect();
    HttpResponse::Ok().json(kinds)
}

/// `GET /api/v1/probe/{kind}`: digest a synthetic error of that kind
///
/// Unknown labels are digested as unclassified errors.
pub async fn probe(path: web::Path<String>, digester: web::Data<Digester>) -> HttpResponse {
    let label = path.into_inner();
    let cause: Cause = format!("synthetic failure requested for {label}").into();

    let err = new_err_or_fallback(&label, Some(cause), "This is a probe error", "api.probe");
    digest_response(&*err, digester.get_ref())
}
