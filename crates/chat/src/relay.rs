//! Chat relay to the hosted conversational model.
//!
//! The relay forwards the visitor's free-text message, with the fixed sales
//! persona and the running conversation, to the Gemini `generateContent`
//! endpoint and hands back the reply verbatim. Any failure collapses to one of
//! two fixed friendly strings; the UI path never sees an error value.

use async_trait::async_trait;
use peekaboo_core::config::ChatConfig;
use peekaboo_core::types::{ChatMessage, ChatRole};
use peekaboo_core::PeekabooResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

use crate::prompt::{FALLBACK_EMPTY_REPLY, FALLBACK_TRANSPORT, SYSTEM_PROMPT};

/// A conversational backend for the chat widget.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Forward one user message and return the reply text. Always returns a
    /// displayable string, falling back to a canned apology on failure.
    async fn send_message(&self, text: &str) -> String;
}

// ─── Gemini wire format ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

// ─── Gemini relay ───────────────────────────────────────────────────────────

/// Relay holding one conversation with the hosted model.
pub struct GeminiRelay {
    config: ChatConfig,
    http: reqwest::Client,
    history: Mutex<Vec<ChatMessage>>,
}

impl GeminiRelay {
    pub fn new(config: &ChatConfig) -> PeekabooResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;
        Ok(Self {
            config: config.clone(),
            http,
            history: Mutex::new(Vec::new()),
        })
    }

    fn request_body(&self, history: &[ChatMessage]) -> GenerateContentRequest {
        let contents = history
            .iter()
            .map(|m| Content {
                role: Some(
                    match m.role {
                        ChatRole::User => "user",
                        ChatRole::Model => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: m.text.clone(),
                }],
            })
            .collect();

        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        }
    }

    async fn generate(&self, history: &[ChatMessage]) -> anyhow::Result<Option<String>> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&self.request_body(history))
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty());

        Ok(text)
    }
}

#[async_trait]
impl ChatClient for GeminiRelay {
    async fn send_message(&self, text: &str) -> String {
        if !self.config.enabled || self.config.api_key.is_empty() {
            return FALLBACK_TRANSPORT.to_string();
        }

        let snapshot = {
            let mut history = match self.history.lock() {
                Ok(h) => h,
                Err(poisoned) => poisoned.into_inner(),
            };
            history.push(ChatMessage::user(text));
            history.clone()
        };

        let reply = match self.generate(&snapshot).await {
            Ok(Some(reply)) => {
                debug!(chars = reply.len(), "Model reply received");
                metrics::counter!("chat.replies").increment(1);
                reply
            }
            Ok(None) => {
                warn!("Model returned no candidate text");
                metrics::counter!("chat.empty_replies").increment(1);
                FALLBACK_EMPTY_REPLY.to_string()
            }
            Err(e) => {
                warn!(error = %e, "Chat relay request failed");
                metrics::counter!("chat.failures").increment(1);
                FALLBACK_TRANSPORT.to_string()
            }
        };

        let mut history = match self.history.lock() {
            Ok(h) => h,
            Err(poisoned) => poisoned.into_inner(),
        };
        history.push(ChatMessage::model(reply.clone()));
        reply
    }
}

// ─── Scripted client ────────────────────────────────────────────────────────

/// In-process client that replays scripted answers. Used in tests and when
/// running without an API key.
pub struct ScriptedChatClient {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedChatClient {
    pub fn new(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    async fn send_message(&self, _text: &str) -> String {
        let mut replies = match self.replies.lock() {
            Ok(r) => r,
            Err(poisoned) => poisoned.into_inner(),
        };
        replies
            .pop_front()
            .unwrap_or_else(|| FALLBACK_EMPTY_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn relay_without_key_answers_with_fallback() {
        let relay = GeminiRelay::new(&ChatConfig::default()).unwrap();
        let reply = relay.send_message("هل عندكم عروض؟").await;
        assert_eq!(reply, FALLBACK_TRANSPORT);
    }

    #[tokio::test]
    async fn scripted_client_replays_then_falls_back() {
        let client = ScriptedChatClient::new(vec!["Welcome to Peekaboo! 🧸".to_string()]);
        assert_eq!(client.send_message("hi").await, "Welcome to Peekaboo! 🧸");
        assert_eq!(client.send_message("hi again").await, FALLBACK_EMPTY_REPLY);
    }

    #[test]
    fn request_body_carries_persona_and_history() {
        let relay = GeminiRelay::new(&ChatConfig::default()).unwrap();
        let history = vec![
            ChatMessage::model("أهلاً!"),
            ChatMessage::user("How much is the evening ticket?"),
        ];
        let body = relay.request_body(&history);
        assert!(body.system_instruction.parts[0].text.contains("Peekaboo"));
        assert_eq!(body.contents.len(), 2);
        assert_eq!(body.contents[1].role.as_deref(), Some("user"));
    }
}
