//! Chat widget endpoint — relays visitor messages to the hosted model.

use axum::extract::State;
use axum::Json;
use peekaboo_chat::prompt::GREETING;
use serde::{Deserialize, Serialize};

use crate::rest::{bad_request, ApiError, AppState, MAX_FIELD_LEN};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// GET /v1/chat/greeting — The canned opening message for the widget.
pub async fn handle_greeting() -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: GREETING.to_string(),
    })
}

/// POST /v1/chat — Forward one message. Upstream failure still answers 200
/// with the friendly fallback; the widget never renders a transport error.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(bad_request("Message must not be empty"));
    }
    if request.message.len() > MAX_FIELD_LEN {
        return Err(bad_request("Message exceeds maximum length"));
    }

    metrics::counter!("chat.api.messages").increment(1);
    let reply = state.chat.send_message(&request.message).await;
    Ok(Json(ChatResponse { reply }))
}
