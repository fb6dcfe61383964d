//! Key-value capability for feed registrations.

use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value store keyed by opaque feed identifiers.
///
/// Implementations must tolerate concurrent access; the encoding core takes
/// no dependency on this capability.
pub trait FeedStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store. Registrations live as long as the process.
#[derive(Debug, Default)]
pub struct MemoryFeedStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryFeedStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedStore for MemoryFeedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}
