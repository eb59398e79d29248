// Library exports for testing and external use

pub mod config;
pub mod handlers;
pub mod routes;
pub mod telemetry;
