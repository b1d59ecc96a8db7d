// Static descriptor endpoints:
//
// GET /                    — service name, version and routes
// GET /api/test            — smoke-test payload for clients, with known categories
// GET /api/sample-keywords — canned title/keyword examples

use axum::Json;
use serde_json::{json, Value};

use crate::keywords::lists::category_names;
use crate::keywords::samples::SAMPLES;
use crate::web::ENDPOINTS;

pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "Easy Keywords Backend",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}

pub async fn test_endpoint() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Easy Keywords API is working!",
        "endpoints": ENDPOINTS,
        "categories": category_names(),
    }))
}

pub async fn sample_keywords() -> Json<Value> {
    Json(json!({
        "success": true,
        "samples": SAMPLES,
    }))
}
