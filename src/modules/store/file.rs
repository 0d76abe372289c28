use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use super::{PersistentStore, StoreError, StoreResult};

/// Reload-surviving store backed by one JSON object file under the platform
/// data directory. Growth is unbounded by design: one entry per distinct
/// movie visited plus the preference key.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at `<data dir>/tape-operator/store.json`.
    pub fn new() -> StoreResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("no platform data directory".to_string()))?;
        Self::with_path(data_dir.join("tape-operator").join("store.json"))
    }

    pub fn with_path(path: PathBuf) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    fn read_entries(&self) -> StoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PersistentStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
