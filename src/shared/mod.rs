pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

// Re-exports for convenience
pub use errors::{SessionError, SessionResult};
