#![warn(clippy::unwrap_used)]

pub mod prompt;
pub mod relay;

pub use relay::{ChatClient, GeminiRelay, ScriptedChatClient};
