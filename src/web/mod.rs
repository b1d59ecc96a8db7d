// Web server — Axum-based JSON API in front of the keyword generator.
//
// Every route serves JSON. Unknown paths, and known paths hit with the wrong
// method, get a 404 body listing the routes that do exist, so a misconfigured
// client can see what it should call.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::keywords::traits::KeywordGenerator;

pub mod handlers;

/// Routes advertised by the descriptor endpoints and the 404 body.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /api/health",
    "POST /api/keywords/generate",
    "GET /api/test",
    "GET /api/sample-keywords",
];

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn KeywordGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn KeywordGenerator>) -> Self {
        Self { generator }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: &Config, generator: Arc<dyn KeywordGenerator>) -> Result<()> {
    let app = build_router(AppState::new(generator));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Easy Keywords API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the full router with CORS and request tracing applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::info::root))
        .route("/api/health", get(handlers::health::health))
        .route(
            "/api/keywords/generate",
            post(handlers::keywords::generate_keywords),
        )
        .route("/api/test", get(handlers::info::test_endpoint))
        .route(
            "/api/sample-keywords",
            get(handlers::info::sample_keywords),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 404 for any path and method pair the router doesn't serve.
async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": "Route not found",
            "path": uri.path(),
            "availableRoutes": ENDPOINTS,
        })),
    )
        .into_response()
}
