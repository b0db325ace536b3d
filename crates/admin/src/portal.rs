//! Staff portal: password gate and content editing.
//!
//! The gate is a client-grade password check, not cryptographic auth. Three
//! failed attempts lock the portal for a configured cooldown. Every
//! successful login leaves a `Security` entry in the activity log, and all
//! edits write through the session store so a reload observes them.

use peekaboo_core::config::AdminConfig;
use peekaboo_core::types::{BookingKind, BookingRecord, LocalizedText, PartyPackage, PlayZone, TicketItem};
use peekaboo_core::{PeekabooError, PeekabooResult};
use peekaboo_store::SiteRecords;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{info, warn};

// ─── Update payloads ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub age_group: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketUpdate {
    pub name: Option<LocalizedText>,
    pub price: Option<String>,
    pub numeric_price: Option<f64>,
    pub desc: Option<LocalizedText>,
    pub color: Option<String>,
    pub features_en: Option<Vec<String>>,
    pub features_ar: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartyUpdate {
    pub name: Option<LocalizedText>,
    pub price: Option<String>,
    pub numeric_price: Option<f64>,
    pub color: Option<String>,
    pub includes_en: Option<Vec<String>>,
    pub includes_ar: Option<Vec<String>>,
}

/// Activity log summary for the overview tab.
#[derive(Debug, Clone, Serialize)]
pub struct BookingStats {
    pub total: usize,
    pub tickets: usize,
    pub parties: usize,
    pub security: usize,
}

// ─── Portal ─────────────────────────────────────────────────────────────────

struct GateState {
    failures: u32,
    locked_until: Option<Instant>,
}

/// Password-gated editor over the persisted site records.
pub struct AdminPortal {
    config: AdminConfig,
    records: Arc<SiteRecords>,
    gate: Mutex<GateState>,
}

impl AdminPortal {
    pub fn new(config: &AdminConfig, records: Arc<SiteRecords>) -> Self {
        Self {
            config: config.clone(),
            records,
            gate: Mutex::new(GateState {
                failures: 0,
                locked_until: None,
            }),
        }
    }

    // ─── Session gate ──────────────────────────────────────────────────────

    /// Validate the portal password. Failures accumulate toward a lockout;
    /// success opens the session and logs a security entry.
    pub fn login(&self, password: &str) -> PeekabooResult<()> {
        let mut gate = match self.gate.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(until) = gate.locked_until {
            if Instant::now() < until {
                return Err(PeekabooError::Unauthorized(
                    "Too many attempts. Locked for 30 seconds.".to_string(),
                ));
            }
            gate.locked_until = None;
            gate.failures = 0;
        }

        if password != self.config.password {
            gate.failures += 1;
            metrics::counter!("admin.login_failures").increment(1);
            if gate.failures >= self.config.max_attempts {
                gate.locked_until =
                    Some(Instant::now() + Duration::from_secs(self.config.lockout_secs));
                warn!(failures = gate.failures, "Staff portal locked after repeated failures");
                return Err(PeekabooError::Unauthorized(
                    "Too many attempts. Locked for 30 seconds.".to_string(),
                ));
            }
            return Err(PeekabooError::Unauthorized(
                "Incorrect password. Access denied.".to_string(),
            ));
        }

        gate.failures = 0;
        gate.locked_until = None;
        drop(gate);

        self.records.set_admin_session(true);
        self.records.track_booking(
            BookingKind::Security,
            serde_json::json!({ "event": "Admin Login Success" }),
        );
        info!("Staff portal session opened");
        Ok(())
    }

    pub fn logout(&self) {
        self.records.set_admin_session(false);
        info!("Staff portal session closed");
    }

    pub fn is_logged_in(&self) -> bool {
        self.records.admin_session()
    }

    fn require_session(&self) -> PeekabooResult<()> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(PeekabooError::Unauthorized(
                "Staff session required".to_string(),
            ))
        }
    }

    // ─── Content editing ───────────────────────────────────────────────────

    pub fn update_zone(&self, id: &str, update: ZoneUpdate) -> PeekabooResult<PlayZone> {
        self.require_session()?;
        let mut zones = self.records.zones();
        let zone = zones
            .iter_mut()
            .find(|z| z.id == id)
            .ok_or_else(|| PeekabooError::Validation(format!("Unknown zone id: {id}")))?;

        if let Some(name) = update.name {
            zone.name = name;
        }
        if let Some(category) = update.category {
            zone.category = category;
        }
        if let Some(age_group) = update.age_group {
            zone.age_group = age_group;
        }
        if let Some(image) = update.image {
            zone.image = image;
        }
        if let Some(description) = update.description {
            zone.description = description;
        }

        let updated = zone.clone();
        self.records.set_zones(&zones);
        info!(zone = %id, "Zone updated");
        Ok(updated)
    }

    pub fn update_ticket(&self, index: usize, update: TicketUpdate) -> PeekabooResult<TicketItem> {
        self.require_session()?;
        let mut content = self.records.site_content();
        let ticket = content
            .tickets
            .get_mut(index)
            .ok_or_else(|| PeekabooError::Validation(format!("Unknown ticket index: {index}")))?;

        if let Some(name) = update.name {
            ticket.name = name;
        }
        if let Some(price) = update.price {
            ticket.price = price;
        }
        if let Some(numeric_price) = update.numeric_price {
            if numeric_price < 0.0 {
                return Err(PeekabooError::Validation(
                    "Ticket price must be non-negative".to_string(),
                ));
            }
            ticket.numeric_price = numeric_price;
        }
        if let Some(desc) = update.desc {
            ticket.desc = desc;
        }
        if let Some(color) = update.color {
            ticket.color = color;
        }
        if let Some(features_en) = update.features_en {
            ticket.features_en = features_en;
        }
        if let Some(features_ar) = update.features_ar {
            ticket.features_ar = features_ar;
        }

        let updated = ticket.clone();
        self.records.set_site_content(&content);
        info!(ticket = index, "Ticket updated");
        Ok(updated)
    }

    pub fn update_party(&self, index: usize, update: PartyUpdate) -> PeekabooResult<PartyPackage> {
        self.require_session()?;
        let mut content = self.records.site_content();
        let party = content
            .parties
            .get_mut(index)
            .ok_or_else(|| PeekabooError::Validation(format!("Unknown party index: {index}")))?;

        if let Some(name) = update.name {
            party.name = name;
        }
        if let Some(price) = update.price {
            party.price = price;
        }
        if let Some(numeric_price) = update.numeric_price {
            if numeric_price < 0.0 {
                return Err(PeekabooError::Validation(
                    "Package price must be non-negative".to_string(),
                ));
            }
            party.numeric_price = numeric_price;
        }
        if let Some(color) = update.color {
            party.color = color;
        }
        if let Some(includes_en) = update.includes_en {
            party.includes_en = includes_en;
        }
        if let Some(includes_ar) = update.includes_ar {
            party.includes_ar = includes_ar;
        }

        let updated = party.clone();
        self.records.set_site_content(&content);
        info!(party = index, "Party package updated");
        Ok(updated)
    }

    /// Restore all site content to the factory seed. The stars balance is
    /// untouched; resetting it is a separate explicit action.
    pub fn reset_content(&self) -> PeekabooResult<()> {
        self.require_session()?;
        self.records.reset_content();
        self.records.track_booking(
            BookingKind::Security,
            serde_json::json!({ "event": "Content Reset To Defaults" }),
        );
        info!("Site content reset to factory defaults");
        Ok(())
    }

    /// Explicit administrative reset of the stars balance back to the seed.
    pub fn reset_stars(&self) -> PeekabooResult<()> {
        self.require_session()?;
        self.records.reset_stars();
        self.records.track_booking(
            BookingKind::Security,
            serde_json::json!({ "event": "Stars Balance Reset" }),
        );
        info!("Stars balance reset");
        Ok(())
    }

    // ─── Overview ──────────────────────────────────────────────────────────

    pub fn bookings(&self) -> PeekabooResult<Vec<BookingRecord>> {
        self.require_session()?;
        Ok(self.records.bookings())
    }

    pub fn stats(&self) -> PeekabooResult<BookingStats> {
        self.require_session()?;
        let log = self.records.bookings();
        Ok(BookingStats {
            total: log.len(),
            tickets: log.iter().filter(|b| b.kind == BookingKind::Ticket).count(),
            parties: log.iter().filter(|b| b.kind == BookingKind::Party).count(),
            security: log
                .iter()
                .filter(|b| b.kind == BookingKind::Security)
                .count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peekaboo_core::config::StoreConfig;
    use peekaboo_store::SessionStore;

    fn portal() -> AdminPortal {
        let records = Arc::new(SiteRecords::new(
            Arc::new(SessionStore::new()),
            &StoreConfig::default(),
            150,
        ));
        AdminPortal::new(&AdminConfig::default(), records)
    }

    #[test]
    fn correct_password_opens_session_and_logs_it() {
        let p = portal();
        assert!(!p.is_logged_in());
        p.login("peekaboo2025").unwrap();
        assert!(p.is_logged_in());

        let log = p.bookings().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, BookingKind::Security);
    }

    #[test]
    fn wrong_password_is_rejected_inline() {
        let p = portal();
        let err = p.login("letmein").unwrap_err();
        assert!(err.to_string().contains("Incorrect password"));
        assert!(!p.is_logged_in());
    }

    #[test]
    fn third_failure_locks_the_gate() {
        let p = portal();
        for _ in 0..2 {
            assert!(p.login("nope").is_err());
        }
        let err = p.login("nope").unwrap_err();
        assert!(err.to_string().contains("Too many attempts"));

        // Even the correct password is rejected while locked.
        let err = p.login("peekaboo2025").unwrap_err();
        assert!(err.to_string().contains("Too many attempts"));
    }

    #[test]
    fn edits_require_an_open_session() {
        let p = portal();
        let err = p
            .update_ticket(0, TicketUpdate::default())
            .unwrap_err();
        assert!(matches!(err, PeekabooError::Unauthorized(_)));
    }

    #[test]
    fn ticket_edit_writes_through() {
        let p = portal();
        p.login("peekaboo2025").unwrap();
        let updated = p
            .update_ticket(
                0,
                TicketUpdate {
                    numeric_price: Some(4.0),
                    price: Some("4.00 JD".to_string()),
                    ..TicketUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.numeric_price, 4.0);
        assert_eq!(updated.price, "4.00 JD");
    }

    #[test]
    fn negative_price_is_rejected() {
        let p = portal();
        p.login("peekaboo2025").unwrap();
        let err = p
            .update_ticket(
                0,
                TicketUpdate {
                    numeric_price: Some(-1.0),
                    ..TicketUpdate::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, PeekabooError::Validation(_)));
    }

    #[test]
    fn zone_edit_and_unknown_zone() {
        let p = portal();
        p.login("peekaboo2025").unwrap();
        let updated = p
            .update_zone(
                "1",
                ZoneUpdate {
                    name: Some("Ball Pit Nebula".to_string()),
                    ..ZoneUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Ball Pit Nebula");

        assert!(p.update_zone("99", ZoneUpdate::default()).is_err());
    }

    #[test]
    fn reset_restores_factory_content() {
        let p = portal();
        p.login("peekaboo2025").unwrap();
        p.update_ticket(
            0,
            TicketUpdate {
                numeric_price: Some(9.0),
                ..TicketUpdate::default()
            },
        )
        .unwrap();
        p.reset_content().unwrap();

        let stats = p.stats().unwrap();
        assert_eq!(stats.security, 2); // login + reset
    }
}
