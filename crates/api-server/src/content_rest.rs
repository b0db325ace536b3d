//! Site content and party booking endpoints.

use axum::extract::State;
use axum::Json;
use peekaboo_core::content;
use peekaboo_core::types::{
    BookingKind, PartyBookingRequest, PartyPackage, PartyTheme, PlayZone, SiteContent, TicketItem,
};
use serde::Serialize;
use uuid::Uuid;

use crate::rest::{bad_request, ApiError, AppState, MAX_FIELD_LEN};

/// GET /v1/content — The full editable site content.
pub async fn handle_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(state.records.site_content())
}

/// GET /v1/content/zones
pub async fn handle_zones(State(state): State<AppState>) -> Json<Vec<PlayZone>> {
    Json(state.records.zones())
}

/// GET /v1/content/tickets
pub async fn handle_tickets(State(state): State<AppState>) -> Json<Vec<TicketItem>> {
    Json(state.records.site_content().tickets)
}

/// GET /v1/content/parties
pub async fn handle_parties(State(state): State<AppState>) -> Json<Vec<PartyPackage>> {
    Json(state.records.site_content().parties)
}

/// GET /v1/content/themes — Party themes are fixed, not editable.
pub async fn handle_themes() -> Json<Vec<PartyTheme>> {
    Json(content::default_themes())
}

#[derive(Debug, Serialize)]
pub struct PartyBookingResponse {
    pub booking_id: Uuid,
    pub status: String,
}

fn validate_party_booking(request: &PartyBookingRequest, state: &AppState) -> Result<(), ApiError> {
    if request.child_name.trim().is_empty() {
        return Err(bad_request("Child name must not be empty"));
    }
    if request.child_name.len() > MAX_FIELD_LEN {
        return Err(bad_request("Child name exceeds maximum length"));
    }
    if request.guest_count == 0 {
        return Err(bad_request("Guest count must be at least 1"));
    }
    if !content::default_themes().iter().any(|t| t.id == request.theme_id) {
        return Err(bad_request("Unknown party theme"));
    }
    if state
        .records
        .site_content()
        .parties
        .get(request.package_index)
        .is_none()
    {
        return Err(bad_request("Unknown package index"));
    }
    Ok(())
}

/// POST /v1/party/book — Record a party reservation request.
pub async fn handle_party_booking(
    State(state): State<AppState>,
    Json(request): Json<PartyBookingRequest>,
) -> Result<Json<PartyBookingResponse>, ApiError> {
    validate_party_booking(&request, &state)?;

    let content = state.records.site_content();
    let package = &content.parties[request.package_index];
    let record = state.records.track_booking(
        BookingKind::Party,
        serde_json::json!({
            "theme": request.theme_id,
            "package": package.name.en,
            "child_name": request.child_name,
            "age_turning": request.age_turning,
            "party_date": request.party_date,
            "guest_count": request.guest_count,
        }),
    );
    metrics::counter!("party.bookings").increment(1);

    Ok(Json(PartyBookingResponse {
        booking_id: record.id,
        status: "confirmed".to_string(),
    }))
}
