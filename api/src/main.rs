use actix_web::{web, App, HttpServer};
use anyhow::Context;
use errx_api::{config, routes, telemetry};
use errx_core::{Digester, TracingSink};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("loading configuration")?;
    telemetry::init(&config.logging).context("initialising telemetry")?;

    info!(environment = %config.environment, "Starting errx API server");

    let digester = web::Data::new(Digester::from_config(&config.errors, Arc::new(TracingSink)));
    let errors = config.errors.clone();
    let bind_address = config.server.bind_address();
    info!(
        fallback = ?errors.fallback,
        probe = errors.probe_enabled,
        "Server will bind to: {}",
        bind_address
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(digester.clone())
            .configure(|cfg| routes::configure(cfg, &errors))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("binding {bind_address}"))?
        .run()
        .await?;

    Ok(())
}
