use actix_web::HttpResponse;
use errx_shared::HealthResponse;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("errx-api", env!("CARGO_PKG_VERSION")))
}
