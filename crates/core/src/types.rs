//! Shared domain types for the Peekaboo play-center platform.
//!
//! The site is bilingual (Arabic/English); anything shown to visitors carries
//! both renditions as a fixed-shape record rather than an open dictionary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Localization ───────────────────────────────────────────────────────────

/// Site display languages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Ar,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Ar
    }
}

/// A piece of copy in both site languages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

// ─── Catalog ────────────────────────────────────────────────────────────────

/// A purchasable ticket as shown on the rates section.
///
/// `price` is the display string ("7.00 JD"); `numeric_price` is the value the
/// loyalty arithmetic runs on. Both are owned by the content editor, the
/// loyalty engine only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketItem {
    pub name: LocalizedText,
    pub price: String,
    pub numeric_price: f64,
    pub desc: LocalizedText,
    /// Accent color hex used by the presentation layer.
    pub color: String,
    pub features_en: Vec<String>,
    pub features_ar: Vec<String>,
}

/// A birthday party package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartyPackage {
    pub name: LocalizedText,
    pub price: String,
    pub numeric_price: f64,
    pub color: String,
    pub includes_en: Vec<String>,
    pub includes_ar: Vec<String>,
}

/// An indoor play zone card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayZone {
    pub id: String,
    pub name: String,
    pub category: String,
    pub age_group: String,
    pub image: String,
    pub description: String,
}

/// A party decoration theme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartyTheme {
    pub id: String,
    pub name: LocalizedText,
    pub color: String,
}

// ─── Site Content ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub manager: String,
    pub phone: String,
    pub location: LocalizedText,
}

/// The editable aggregate the staff portal rewrites. Everything a visitor
/// sees that is not hard-coded layout lives here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub hours: LocalizedText,
    pub contact: ContactInfo,
    pub tickets: Vec<TicketItem>,
    pub parties: Vec<PartyPackage>,
}

// ─── Bookings ───────────────────────────────────────────────────────────────

/// Kind of entry in the recent-activity log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    Ticket,
    Party,
    Security,
}

/// One entry in the capped recent-activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: uuid::Uuid,
    pub kind: BookingKind,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl BookingRecord {
    pub fn new(kind: BookingKind, details: serde_json::Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            kind,
            details,
            timestamp: Utc::now(),
        }
    }
}

/// Party reservation form as submitted from the parties section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyBookingRequest {
    pub child_name: String,
    pub age_turning: u8,
    pub party_date: String,
    pub guest_count: u32,
    pub theme_id: String,
    pub package_index: usize,
}

// ─── Chat ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn in the assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
            is_error: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_picks_language() {
        let t = LocalizedText::new("Our Rates", "أسعارنا");
        assert_eq!(t.get(Language::En), "Our Rates");
        assert_eq!(t.get(Language::Ar), "أسعارنا");
    }

    #[test]
    fn booking_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BookingKind::Ticket).unwrap();
        assert_eq!(json, "\"ticket\"");
    }
}
