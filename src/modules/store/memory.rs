use std::collections::HashMap;
use std::sync::Mutex;

use super::{PersistentStore, StoreError, StoreResult};

/// In-process store for tests and hosts that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("preferred-source", "hd").unwrap();
        assert_eq!(store.get("preferred-source").unwrap().as_deref(), Some("hd"));

        // Last writer wins
        store.set("preferred-source", "turbo").unwrap();
        assert_eq!(
            store.get("preferred-source").unwrap().as_deref(),
            Some("turbo")
        );
    }
}
