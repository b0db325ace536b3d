pub mod config;
pub mod content;
pub mod error;
pub mod loyalty;
pub mod types;

pub use config::AppConfig;
pub use error::{PeekabooError, PeekabooResult};
