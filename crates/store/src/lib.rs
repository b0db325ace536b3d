#![warn(clippy::unwrap_used)]

pub mod records;
pub mod session;

pub use records::SiteRecords;
pub use session::SessionStore;
