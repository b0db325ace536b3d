#![warn(clippy::unwrap_used)]

pub mod portal;

pub use portal::{AdminPortal, BookingStats, PartyUpdate, TicketUpdate, ZoneUpdate};
