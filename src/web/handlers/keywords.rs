// POST /api/keywords/generate — the main endpoint.
//
// Body: { title?, description?, category? }. Only JSON content types are
// parsed; any other body, an empty body, or a JSON array counts as {}.
// Fields that are present but not strings are ignored. Malformed JSON or a
// bare scalar is the one failure mode: 500 with the fallback list attached
// so clients always have something to show.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::keywords::select_text;
use crate::web::AppState;

/// Fields pulled out of the request body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerateRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl GenerateRequest {
    /// Parse a raw request body given its `Content-Type`.
    ///
    /// Non-JSON content types and whitespace-only bodies count as `{}`.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, serde_json::Error> {
        if !content_type.is_some_and(is_json_content_type)
            || body.iter().all(u8::is_ascii_whitespace)
        {
            return Ok(Self::default());
        }

        let fields: Map<String, Value> = match serde_json::from_slice(body)? {
            Value::Object(fields) => fields,
            // Arrays carry no named fields
            Value::Array(_) => return Ok(Self::default()),
            other => serde_json::from_value(other)?,
        };
        let string_field = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_owned);

        Ok(Self {
            title: string_field("title"),
            description: string_field("description"),
            category: string_field("category"),
        })
    }
}

/// `application/json` or any `+json` suffix type, parameters ignored.
fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub keywords: Vec<String>,
    pub count: usize,
    /// Wall-clock generation time in milliseconds
    pub processing_time: f64,
    pub model: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateError {
    pub success: bool,
    pub error: String,
    pub fallback_keywords: Vec<String>,
}

/// POST /api/keywords/generate — generate keywords for a title or description.
pub async fn generate_keywords(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let request = match GenerateRequest::from_body(content_type, &body) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "Unreadable keyword request body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerateError {
                    success: false,
                    error: e.to_string(),
                    fallback_keywords: state.generator.fallback(),
                }),
            )
                .into_response();
        }
    };

    let started = Instant::now();
    let text = select_text(request.title.as_deref(), request.description.as_deref());
    let keywords = state
        .generator
        .generate(text, request.category.as_deref());
    let processing_time = started.elapsed().as_secs_f64() * 1000.0;

    info!(
        title = request.title.as_deref().unwrap_or("No title"),
        category = request.category.as_deref().unwrap_or("general"),
        count = keywords.len(),
        "Generated keywords"
    );

    Json(GenerateResponse {
        success: true,
        count: keywords.len(),
        keywords,
        processing_time,
        model: state.generator.model_name(),
        message: "Keywords generated successfully!",
    })
    .into_response()
}
