//! Integration tests for the mounted routes

use actix_web::{http::StatusCode, test, web, App};
use errx_api::routes;
use errx_core::{Digester, ErrorKind, FallbackPolicy, MemorySink, MessageBody};
use errx_shared::ErrorHandlingConfig;
use std::sync::Arc;

fn errors_config(probe_enabled: bool, fallback: FallbackPolicy) -> ErrorHandlingConfig {
    ErrorHandlingConfig {
        fallback,
        probe_enabled,
        ..Default::default()
    }
}

#[actix_web::test]
async fn test_health_check() {
    let config = errors_config(false, FallbackPolicy::Redact);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Digester::default()))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_is_classified_not_found() {
    let sink = Arc::new(MemorySink::new());
    let config = errors_config(false, FallbackPolicy::Redact);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Digester::new(sink.clone())))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: MessageBody = test::read_body_json(resp).await;
    assert!(body.message.starts_with("The requested resource was not found\n"));
    assert_eq!(sink.len(), 1);
    assert!(sink.lines()[0].contains("router GET /nowhere"));
}

#[actix_web::test]
async fn test_probe_disabled_falls_through_to_not_found() {
    let config = errors_config(false, FallbackPolicy::Redact);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Digester::default()))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/probe/not-found")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_probe_every_kind() {
    let config = errors_config(true, FallbackPolicy::Redact);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Digester::default()))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    for kind in ErrorKind::ALL {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/probe/{}", kind.label()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), kind.category().status_code(), "{kind}");

        let body: MessageBody = test::read_body_json(resp).await;
        assert!(body.message.starts_with("This is a probe error\n"));
        assert!(!body.message.contains("synthetic"));
    }
}

#[actix_web::test]
async fn test_probe_unknown_kind_takes_fallback_path() {
    let config = errors_config(true, FallbackPolicy::Expose);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(
                Digester::default().with_fallback(FallbackPolicy::Expose),
            ))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/probe/teapot")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: MessageBody = test::read_body_json(resp).await;
    assert_eq!(body.message, "Unknown error kind: teapot");
}

#[actix_web::test]
async fn test_probe_lists_taxonomy() {
    let config = errors_config(true, FallbackPolicy::Redact);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Digester::default()))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/probe").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let kinds = body.as_array().unwrap();
    assert_eq!(kinds.len(), 11);
    assert_eq!(
        kinds[3],
        serde_json::json!({ "kind": "not-found", "category": "not-found", "status": 404 })
    );
}
