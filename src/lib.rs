pub mod modules;
pub mod shared;

// Re-exports for easy external access - only export what hosts actually use
pub use modules::identity::{compute_key, CacheKey, MovieIdentity};
pub use modules::provider::{KinoboxClient, SourceProvider, SourceRecord};
pub use modules::selection::{default_index, FALLBACK_ACCENT};
pub use modules::session::{
    AddressState, Analytics, AnalyticsPayload, AnalyticsProps, ColorProbe, FailReason,
    InMemoryAddressState, MessageKind, NoopColorProbe, Presentation, SessionConfig,
    SessionController, SessionState, MOVIE_PARAM,
};
pub use modules::store::{
    FileStore, MemoryStore, PersistentStore, StoreError, StoreResult, PREFERRED_SOURCE_KEY,
};
pub use shared::errors::{SessionError, SessionResult};
pub use shared::utils::init_logger;
