mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Fixed key remembering the provider type the user last explicitly chose.
pub const PREFERRED_SOURCE_KEY: &str = "preferred-source";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Flat key -> string map surviving page reloads. No eviction, no TTL.
///
/// Callers must treat every error as soft: log a warning and continue
/// without persistence. Nothing here escalates into a session failure.
pub trait PersistentStore: Send + Sync {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
