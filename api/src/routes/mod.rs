pub mod probe;

use actix_web::{web, HttpRequest, HttpResponse};
use errx_core::{new_err, Digester, ErrorKind};
use errx_shared::ErrorHandlingConfig;

use crate::handlers::{digest_response, health_check};

/// Mount every route; the probe scope only when enabled
pub fn configure(cfg: &mut web::ServiceConfig, errors: &ErrorHandlingConfig) {
    cfg.route("/health", web::get().to(health_check));

    if errors.probe_enabled {
        cfg.service(
            web::scope("/api/v1/probe")
                .route("", web::get().to(probe::list_kinds))
                .route("/{kind}", web::get().to(probe::probe)),
        );
    }

    cfg.default_service(web::route().to(not_found));
}

/// Unmatched routes terminate through the digest like any other failure
pub async fn not_found(req: HttpRequest, digester: web::Data<Digester>) -> HttpResponse {
    let err = new_err(
        ErrorKind::NotFound,
        None,
        "The requested resource was not found",
        format!("router {} {}", req.method(), req.path()),
    );
    digest_response(&err, digester.get_ref())
}
