//! HTTP adapters - REST API implementations.
//!
//! `ahp` exposes decision runs; this module assembles the full router with
//! its middleware stack.

pub mod ahp;

pub use ahp::{run_routes, RunHandlers};

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::{HeaderValue, Method};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::ServerConfig;

/// Routes without middleware: `/api/runs/*`, `/api/scale` and `/health`.
pub fn api_router(handlers: RunHandlers) -> Router {
    Router::new()
        .nest("/api/runs", run_routes(handlers))
        .route("/api/scale", get(ahp::get_scale))
        .route("/health", get(health))
}

/// Full application router with CORS, tracing and request timeout layers.
pub fn build_router(handlers: RunHandlers, server: &ServerConfig) -> Router {
    api_router(handlers)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Explicit origins when configured, permissive otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any)
    }
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
