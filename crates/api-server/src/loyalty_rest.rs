//! Peekaboo Stars REST endpoints.

use axum::extract::State;
use axum::Json;
use peekaboo_core::loyalty::{PurchaseOutcome, PurchaseRequest, Tier, TierProgress};
use peekaboo_core::types::BookingKind;
use serde::Serialize;

use crate::rest::{bad_request, ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: u32,
    pub tier: Tier,
    pub tier_name_en: String,
    pub tier_name_ar: String,
    pub progress: Option<TierProgress>,
    pub can_redeem: bool,
}

/// GET /v1/loyalty/balance — Current stars balance and derived tier.
pub async fn handle_balance(State(state): State<AppState>) -> Json<BalanceResponse> {
    let balance = state.records.stars_balance();
    let tier = state.engine.current_tier(balance);
    let name = tier.display_name();
    Json(BalanceResponse {
        balance,
        tier,
        tier_name_en: name.en,
        tier_name_ar: name.ar,
        progress: state.engine.next_tier_progress(balance),
        can_redeem: state.engine.can_redeem(balance),
    })
}

#[derive(Debug, Serialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub threshold: u32,
    pub color: &'static str,
    pub perks_en: Vec<&'static str>,
    pub perks_ar: Vec<&'static str>,
}

/// GET /v1/loyalty/tiers — The rank table with thresholds and perks.
pub async fn handle_tiers(State(state): State<AppState>) -> Json<Vec<TierInfo>> {
    let tiers = [Tier::Seedling, Tier::Sprout, Tier::GoldenMushroom]
        .into_iter()
        .map(|tier| TierInfo {
            tier,
            threshold: state.engine.threshold(tier),
            color: tier.color(),
            perks_en: tier.perks_en().to_vec(),
            perks_ar: tier.perks_ar().to_vec(),
        })
        .collect();
    Json(tiers)
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub ticket: String,
    #[serde(flatten)]
    pub outcome: PurchaseOutcome,
    pub tier: Tier,
}

/// POST /v1/loyalty/purchase — Buy a ticket, optionally redeeming stars.
///
/// Persists the new balance and appends a `Ticket` entry to the activity log.
pub async fn handle_purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    let content = state.records.site_content();
    let ticket = content
        .tickets
        .get(request.ticket_index)
        .ok_or_else(|| bad_request("Unknown ticket index"))?;

    let balance = state.records.stars_balance();
    let outcome = state
        .engine
        .apply_purchase(balance, ticket.numeric_price, request.redeem_requested);

    state.records.set_stars_balance(outcome.new_balance);
    state.records.track_booking(
        BookingKind::Ticket,
        serde_json::json!({
            "ticket_name": ticket.name.en,
            "price": ticket.numeric_price,
            "charged": outcome.charged_price,
            "redeemed": outcome.redeemed,
        }),
    );
    metrics::counter!("loyalty.api.purchases").increment(1);

    Ok(Json(PurchaseResponse {
        ticket: ticket.name.en.clone(),
        tier: state.engine.current_tier(outcome.new_balance),
        outcome,
    }))
}
