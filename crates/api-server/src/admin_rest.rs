//! Staff portal REST endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use peekaboo_admin::{BookingStats, PartyUpdate, TicketUpdate, ZoneUpdate};
use peekaboo_core::types::{BookingRecord, PartyPackage, PlayZone, TicketItem};
use serde::{Deserialize, Serialize};

use crate::rest::{into_api_error, ApiError, AppState};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// POST /v1/admin/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.portal.login(&request.password).map_err(into_api_error)?;
    metrics::counter!("admin.api.logins").increment(1);
    Ok(Json(StatusResponse {
        status: "ok".to_string(),
    }))
}

/// POST /v1/admin/logout
pub async fn handle_logout(State(state): State<AppState>) -> StatusCode {
    state.portal.logout();
    StatusCode::NO_CONTENT
}

/// GET /v1/admin/bookings — Recent activity log, newest last.
pub async fn handle_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingRecord>>, ApiError> {
    state.portal.bookings().map(Json).map_err(into_api_error)
}

/// GET /v1/admin/stats — Activity counts for the overview tab.
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<BookingStats>, ApiError> {
    state.portal.stats().map(Json).map_err(into_api_error)
}

/// PUT /v1/admin/zones/{id}
pub async fn handle_update_zone(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ZoneUpdate>,
) -> Result<Json<PlayZone>, ApiError> {
    state
        .portal
        .update_zone(&id, update)
        .map(Json)
        .map_err(into_api_error)
}

/// PUT /v1/admin/tickets/{index}
pub async fn handle_update_ticket(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(update): Json<TicketUpdate>,
) -> Result<Json<TicketItem>, ApiError> {
    state
        .portal
        .update_ticket(index, update)
        .map(Json)
        .map_err(into_api_error)
}

/// PUT /v1/admin/parties/{index}
pub async fn handle_update_party(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(update): Json<PartyUpdate>,
) -> Result<Json<PartyPackage>, ApiError> {
    state
        .portal
        .update_party(index, update)
        .map(Json)
        .map_err(into_api_error)
}

/// POST /v1/admin/reset — Restore factory content.
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    state.portal.reset_content().map_err(into_api_error)?;
    Ok(Json(StatusResponse {
        status: "reset".to_string(),
    }))
}

/// POST /v1/admin/reset-stars — Explicit administrative balance reset.
pub async fn handle_reset_stars(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.portal.reset_stars().map_err(into_api_error)?;
    Ok(Json(StatusResponse {
        status: "reset".to_string(),
    }))
}
