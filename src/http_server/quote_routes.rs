//! Quote HTTP Routes
//!
//! The quote endpoint hands the raw body to the core unparsed, so the
//! validator owns the whole input contract; this layer only enforces the
//! bearer key and maps errors onto statuses.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::api::{self, ApiError, QuoteResponse};
use crate::observability::Logger;

use super::config::HttpServerConfig;

// ==================
// Shared State
// ==================

/// State shared across quote handlers
pub struct QuoteState {
    pub config: HttpServerConfig,
}

impl QuoteState {
    pub fn new(config: HttpServerConfig) -> Self {
        Self { config }
    }
}

// ==================
// Routes
// ==================

/// Create quote routes
pub fn quote_routes(state: Arc<QuoteState>) -> Router {
    Router::new()
        .route("/api/quote", post(generate_quote_handler))
        .with_state(state)
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Extract the bearer token from the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// Quote handler: bearer check first, then the core pipeline.
async fn generate_quote_handler(
    State(state): State<Arc<QuoteState>>,
    headers: HeaderMap,
    body: Option<Json<Value>>,
) -> Result<Json<QuoteResponse>, ApiError> {
    match bearer_token(&headers) {
        Some(token) if token == state.config.api_key => {}
        _ => {
            Logger::warn("AUTH_FAILED", &[("path", "/api/quote")]);
            return Err(ApiError::Unauthorized);
        }
    }

    let Json(raw) = body.ok_or_else(|| {
        ApiError::InvalidInput("Request body must be a JSON object".to_string())
    })?;

    let response = api::handle_quote(&raw)?;
    Ok(Json(response))
}
