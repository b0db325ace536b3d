#![warn(clippy::unwrap_used)]

pub mod engine;

pub use engine::LoyaltyEngine;
