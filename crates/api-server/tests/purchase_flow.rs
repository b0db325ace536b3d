//! End-to-end purchase flow through the REST handlers: balance → purchase
//! with redemption → persisted balance → activity log, plus the staff portal
//! gate and the chat fallback path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use peekaboo_admin::{AdminPortal, TicketUpdate};
use peekaboo_api::rest::AppState;
use peekaboo_api::{admin_rest, chat_rest, content_rest, loyalty_rest};
use peekaboo_chat::ScriptedChatClient;
use peekaboo_core::config::AppConfig;
use peekaboo_core::loyalty::{PurchaseRequest, Tier};
use peekaboo_core::types::PartyBookingRequest;
use peekaboo_loyalty::LoyaltyEngine;
use peekaboo_store::{SessionStore, SiteRecords};
use std::sync::Arc;
use std::time::Instant;

fn test_state(chat_replies: Vec<String>) -> AppState {
    let config = AppConfig::default();
    let records = Arc::new(SiteRecords::new(
        Arc::new(SessionStore::new()),
        &config.store,
        config.loyalty.welcome_balance,
    ));
    AppState {
        engine: Arc::new(LoyaltyEngine::new(&config.loyalty)),
        portal: Arc::new(AdminPortal::new(&config.admin, records.clone())),
        chat: Arc::new(ScriptedChatClient::new(chat_replies)),
        records,
        node_id: "test-node".to_string(),
        start_time: Instant::now(),
    }
}

#[tokio::test]
async fn purchase_with_redemption_updates_balance_and_log() {
    let state = test_state(Vec::new());

    // Fresh session starts at the welcome seed.
    let balance = loyalty_rest::handle_balance(State(state.clone())).await;
    assert_eq!(balance.0.balance, 150);
    assert_eq!(balance.0.tier, Tier::Seedling);
    assert!(balance.0.can_redeem);

    // Buy the 7.00 JD Evening Solo ticket with the stars discount.
    let response = loyalty_rest::handle_purchase(
        State(state.clone()),
        Json(PurchaseRequest {
            ticket_index: 1,
            redeem_requested: true,
        }),
    )
    .await
    .expect("purchase should succeed");

    assert!(response.0.outcome.redeemed);
    assert_eq!(response.0.outcome.charged_price, 6.0);
    assert_eq!(response.0.outcome.points_earned, 60);
    assert_eq!(response.0.outcome.new_balance, 110);

    // The new balance is what the next read observes.
    let balance = loyalty_rest::handle_balance(State(state.clone())).await;
    assert_eq!(balance.0.balance, 110);

    // The purchase left a ticket entry in the activity log.
    let log = state.records.bookings();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].details["ticket_name"], "Evening Solo");
}

#[tokio::test]
async fn unknown_ticket_index_is_rejected() {
    let state = test_state(Vec::new());
    let err = loyalty_rest::handle_purchase(
        State(state),
        Json(PurchaseRequest {
            ticket_index: 99,
            redeem_requested: false,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn party_booking_lands_in_activity_log() {
    let state = test_state(Vec::new());
    let response = content_rest::handle_party_booking(
        State(state.clone()),
        Json(PartyBookingRequest {
            child_name: "Lina".to_string(),
            age_turning: 6,
            party_date: "2026-09-12".to_string(),
            guest_count: 14,
            theme_id: "princess".to_string(),
            package_index: 1,
        }),
    )
    .await
    .expect("booking should succeed");
    assert_eq!(response.0.status, "confirmed");

    let log = state.records.bookings();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].details["package"], "Wonderland Bash");
}

#[tokio::test]
async fn admin_edits_are_gated_then_visible_to_visitors() {
    let state = test_state(Vec::new());

    // No session: editing is rejected with 401.
    let err = admin_rest::handle_update_ticket(
        State(state.clone()),
        Path(0),
        Json(TicketUpdate {
            numeric_price: Some(4.0),
            ..TicketUpdate::default()
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::UNAUTHORIZED);

    // Login, edit, and the public tickets endpoint reflects the change.
    admin_rest::handle_login(
        State(state.clone()),
        Json(admin_rest::LoginRequest {
            password: "peekaboo2025".to_string(),
        }),
    )
    .await
    .expect("login should succeed");

    admin_rest::handle_update_ticket(
        State(state.clone()),
        Path(0),
        Json(TicketUpdate {
            numeric_price: Some(4.0),
            price: Some("4.00 JD".to_string()),
            ..TicketUpdate::default()
        }),
    )
    .await
    .expect("edit should succeed");

    let tickets = content_rest::handle_tickets(State(state)).await;
    assert_eq!(tickets.0[0].numeric_price, 4.0);
}

#[tokio::test]
async fn chat_endpoint_always_returns_a_reply() {
    let state = test_state(vec!["مرحباً! عرض المساء ٧ دنانير 🎈".to_string()]);

    let reply = chat_rest::handle_chat(
        State(state.clone()),
        Json(chat_rest::ChatRequest {
            message: "كم سعر تذكرة المساء؟".to_string(),
        }),
    )
    .await
    .expect("chat should answer");
    assert_eq!(reply.0.reply, "مرحباً! عرض المساء ٧ دنانير 🎈");

    // Script exhausted: the widget still gets a friendly canned string.
    let reply = chat_rest::handle_chat(
        State(state),
        Json(chat_rest::ChatRequest {
            message: "وهل يوجد عروض؟".to_string(),
        }),
    )
    .await
    .expect("chat should answer");
    assert!(!reply.0.reply.is_empty());
}
