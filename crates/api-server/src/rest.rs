//! Shared REST state, error shape, and operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use peekaboo_admin::AdminPortal;
use peekaboo_chat::ChatClient;
use peekaboo_core::PeekabooError;
use peekaboo_loyalty::LoyaltyEngine;
use peekaboo_store::SiteRecords;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Maximum length of free-text fields accepted at the API boundary.
pub const MAX_FIELD_LEN: usize = 2000;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<LoyaltyEngine>,
    pub records: Arc<SiteRecords>,
    pub portal: Arc<AdminPortal>,
    pub chat: Arc<dyn ChatClient>,
    pub node_id: String,
    pub start_time: Instant,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error onto the REST error shape.
pub fn into_api_error(e: PeekabooError) -> ApiError {
    let (status, error) = match &e {
        PeekabooError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
        PeekabooError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: e.to_string(),
        }),
    )
}

pub fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "invalid_request".to_string(),
            message: message.to_string(),
        }),
    )
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
