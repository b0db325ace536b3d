//! Session key-value store backed by DashMap for lock-free concurrent access.
//!
//! Models the host environment's local storage: a small set of named string
//! records with read-after-write consistency within one session. Durability
//! beyond the process is neither provided nor required.

use dashmap::DashMap;
use std::sync::Arc;

/// Lock-free string store for the handful of named site records.
pub struct SessionStore {
    entries: Arc<DashMap<String, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Last saved value for `key`, or `None` if never written.
    pub fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|e| e.value().clone())
    }

    pub fn save(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_after_save_returns_last_value() {
        let store = SessionStore::new();
        assert_eq!(store.load("peekaboo_stars"), None);
        store.save("peekaboo_stars", "150".to_string());
        store.save("peekaboo_stars", "220".to_string());
        assert_eq!(store.load("peekaboo_stars"), Some("220".to_string()));
    }

    #[test]
    fn remove_clears_the_record() {
        let store = SessionStore::new();
        store.save("peekaboo_zones", "[]".to_string());
        store.remove("peekaboo_zones");
        assert_eq!(store.load("peekaboo_zones"), None);
        assert!(store.is_empty());
    }
}
