//! Durable key-value capability for imported preview text.
//!
//! The dashboard's real backend is origin-scoped browser storage; the
//! importer only needs `get`/`set`, so the store is an injected trait and
//! tests run against the in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

pub(crate) const KEY_NAMESPACE: &str = "sleeper_previews";

/// Build the store key for one imported preview entry.
pub fn preview_key(league_id: &str, week: u32, entity_id: &str) -> String {
    format!("{KEY_NAMESPACE}_{league_id}_{week}_{entity_id}")
}

/// A durable string-to-string store.
///
/// Writes are last-writer-wins and idempotent; overlapping refreshes write
/// the same value under the same key, so interleaving is benign. Entries are
/// never deleted.
pub trait PreviewStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`PreviewStore`] backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.map.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreviewStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.read().expect("store lock poisoned").get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map
            .write()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}
