//! Typed accessors over the raw session records.
//!
//! One named record per concern: stars balance, site content overrides, play
//! zones, the capped recent-activity log, and the staff session flag. A
//! missing or unparseable record falls back to the factory seed; corruption is
//! logged, never propagated.

use peekaboo_core::config::StoreConfig;
use peekaboo_core::content;
use peekaboo_core::types::{BookingKind, BookingRecord, PlayZone, SiteContent};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::session::SessionStore;

pub const KEY_STARS: &str = "peekaboo_stars";
pub const KEY_SITE_CONTENT: &str = "peekaboo_site_content";
pub const KEY_ZONES: &str = "peekaboo_zones";
pub const KEY_BOOKINGS: &str = "peekaboo_bookings";
pub const KEY_ADMIN_SESSION: &str = "peekaboo_admin_session";

/// Typed view over a [`SessionStore`].
pub struct SiteRecords {
    store: Arc<SessionStore>,
    max_bookings: usize,
    welcome_balance: u32,
}

impl SiteRecords {
    pub fn new(store: Arc<SessionStore>, config: &StoreConfig, welcome_balance: u32) -> Self {
        Self {
            store,
            max_bookings: config.max_bookings,
            welcome_balance,
        }
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.load(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = key, error = %e, "Corrupt session record, using defaults");
                None
            }
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.save(key, raw),
            Err(e) => warn!(key = key, error = %e, "Failed to serialize session record"),
        }
    }

    // ─── Stars balance ─────────────────────────────────────────────────────

    /// Current stars balance, or the welcome seed when nothing is persisted.
    pub fn stars_balance(&self) -> u32 {
        self.store
            .load(KEY_STARS)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(self.welcome_balance)
    }

    pub fn set_stars_balance(&self, balance: u32) {
        self.store.save(KEY_STARS, balance.to_string());
    }

    pub fn reset_stars(&self) {
        self.store.remove(KEY_STARS);
    }

    // ─── Site content ──────────────────────────────────────────────────────

    pub fn site_content(&self) -> SiteContent {
        self.load_json(KEY_SITE_CONTENT)
            .unwrap_or_else(content::default_site_content)
    }

    pub fn set_site_content(&self, content: &SiteContent) {
        self.save_json(KEY_SITE_CONTENT, content);
    }

    pub fn zones(&self) -> Vec<PlayZone> {
        self.load_json(KEY_ZONES).unwrap_or_else(content::default_zones)
    }

    pub fn set_zones(&self, zones: &[PlayZone]) {
        self.save_json(KEY_ZONES, &zones);
    }

    /// Drop all content overrides, restoring the factory seed on next read.
    pub fn reset_content(&self) {
        self.store.remove(KEY_SITE_CONTENT);
        self.store.remove(KEY_ZONES);
    }

    // ─── Recent activity log ───────────────────────────────────────────────

    pub fn bookings(&self) -> Vec<BookingRecord> {
        self.load_json(KEY_BOOKINGS).unwrap_or_default()
    }

    /// Append an entry, keeping only the newest `max_bookings` records.
    pub fn track_booking(&self, kind: BookingKind, details: serde_json::Value) -> BookingRecord {
        let record = BookingRecord::new(kind, details);
        let mut log = self.bookings();
        log.push(record.clone());
        if log.len() > self.max_bookings {
            let excess = log.len() - self.max_bookings;
            log.drain(..excess);
        }
        self.save_json(KEY_BOOKINGS, &log);
        record
    }

    // ─── Staff session flag ────────────────────────────────────────────────

    pub fn admin_session(&self) -> bool {
        self.store
            .load(KEY_ADMIN_SESSION)
            .map(|raw| raw == "true")
            .unwrap_or(false)
    }

    pub fn set_admin_session(&self, active: bool) {
        if active {
            self.store.save(KEY_ADMIN_SESSION, "true".to_string());
        } else {
            self.store.remove(KEY_ADMIN_SESSION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> SiteRecords {
        SiteRecords::new(Arc::new(SessionStore::new()), &StoreConfig::default(), 150)
    }

    #[test]
    fn missing_balance_falls_back_to_welcome_seed() {
        let r = records();
        assert_eq!(r.stars_balance(), 150);
        r.set_stars_balance(220);
        assert_eq!(r.stars_balance(), 220);
        r.reset_stars();
        assert_eq!(r.stars_balance(), 150);
    }

    #[test]
    fn unparseable_balance_falls_back_to_welcome_seed() {
        let store = Arc::new(SessionStore::new());
        store.save(KEY_STARS, "not-a-number".to_string());
        let r = SiteRecords::new(store, &StoreConfig::default(), 150);
        assert_eq!(r.stars_balance(), 150);
    }

    #[test]
    fn content_round_trips_and_resets() {
        let r = records();
        let mut content = r.site_content();
        content.tickets[0].numeric_price = 4.0;
        r.set_site_content(&content);
        assert_eq!(r.site_content().tickets[0].numeric_price, 4.0);

        r.reset_content();
        assert_eq!(
            r.site_content().tickets[0].numeric_price,
            peekaboo_core::content::default_tickets()[0].numeric_price
        );
    }

    #[test]
    fn corrupt_content_record_yields_seed() {
        let store = Arc::new(SessionStore::new());
        store.save(KEY_SITE_CONTENT, "{not json".to_string());
        let r = SiteRecords::new(store, &StoreConfig::default(), 150);
        assert_eq!(r.site_content().contact.manager, "Dina");
    }

    #[test]
    fn booking_log_caps_at_configured_size() {
        let r = records();
        for i in 0..60 {
            r.track_booking(BookingKind::Ticket, json!({ "seq": i }));
        }
        let log = r.bookings();
        assert_eq!(log.len(), 50);
        // Oldest entries were dropped, newest kept.
        assert_eq!(log.first().unwrap().details["seq"], 10);
        assert_eq!(log.last().unwrap().details["seq"], 59);
    }

    #[test]
    fn admin_flag_toggles() {
        let r = records();
        assert!(!r.admin_session());
        r.set_admin_session(true);
        assert!(r.admin_session());
        r.set_admin_session(false);
        assert!(!r.admin_session());
    }
}
