// GET /api/health — liveness probe for hosting platforms and the extension.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub message: &'static str,
    /// RFC 3339, UTC
    pub timestamp: String,
    /// No API key or billing behind this service.
    pub free: bool,
}

/// GET /api/health — always 200 while the process is serving.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        message: "Easy Keywords Backend is working!",
        timestamp: Utc::now().to_rfc3339(),
        free: true,
    })
}
