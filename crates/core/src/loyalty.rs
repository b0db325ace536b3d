//! Peekaboo Stars domain types.
//!
//! Three-rank program: Seedling → Sprout → Golden Mushroom. A balance's rank
//! is the highest tier whose configured threshold is ≤ the balance; the rank
//! itself is derived, never stored. Thresholds live in
//! [`crate::config::LoyaltyConfig`], not here.

use serde::{Deserialize, Serialize};

use crate::types::LocalizedText;

// ─── Tier System ────────────────────────────────────────────────────────────

/// Loyalty ranks in ascending threshold order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Seedling,
    Sprout,
    GoldenMushroom,
}

impl Tier {
    /// Next rank up, `None` at the top.
    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::Seedling => Some(Tier::Sprout),
            Tier::Sprout => Some(Tier::GoldenMushroom),
            Tier::GoldenMushroom => None,
        }
    }

    pub fn display_name(&self) -> LocalizedText {
        match self {
            Tier::Seedling => LocalizedText::new("Seedling", "بذرة"),
            Tier::Sprout => LocalizedText::new("Sprout", "برعم"),
            Tier::GoldenMushroom => LocalizedText::new("Golden Mushroom", "المشروم الذهبي"),
        }
    }

    /// Accent color hex used by the tier card.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Seedling => "#8CC63F",
            Tier::Sprout => "#00ADEF",
            Tier::GoldenMushroom => "#E41E26",
        }
    }

    pub fn perks_en(&self) -> &'static [&'static str] {
        match self {
            Tier::Seedling => &["Earn stars on every jump", "Welcome gift"],
            Tier::Sprout => &["5% Birthday discount", "Exclusive events"],
            Tier::GoldenMushroom => &[
                "Free Parent Coffee",
                "VIP Early Booking",
                "Double star weekends",
            ],
        }
    }

    pub fn perks_ar(&self) -> &'static [&'static str] {
        match self {
            Tier::Seedling => &["اربح نجوم مع كل قفزة", "هدية ترحيبية"],
            Tier::Sprout => &["خصم ٥٪ على أعياد الميلاد", "فعاليات حصرية"],
            Tier::GoldenMushroom => &[
                "قهوة مجانية للأهل",
                "حجز VIP مبكر",
                "عطلات النجوم المضاعفة",
            ],
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Seedling
    }
}

// ─── Purchase & Progress ────────────────────────────────────────────────────

/// Progress toward the next rank. Absent entirely when the balance already
/// sits at the top rank; that is a terminal state, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierProgress {
    pub next_tier: Tier,
    /// Stars still needed to reach `next_tier`, floored at 0.
    pub points_needed: u32,
    /// Position between the two surrounding thresholds, clamped into [0, 1].
    pub progress_fraction: f32,
}

/// Inputs of a single ticket purchase against the stars program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub ticket_index: usize,
    /// Apply the 100-stars-for-1-JD discount if the balance allows it.
    #[serde(default)]
    pub redeem_requested: bool,
}

/// Outcome of a single purchase. Pure data; the caller persists `new_balance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOutcome {
    pub new_balance: u32,
    pub charged_price: f64,
    pub points_earned: u32,
    pub redeemed: bool,
}
