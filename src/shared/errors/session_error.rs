use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy for one resolution session.
///
/// Every variant is terminal for the session that raised it; recovery is
/// always by user action (reload, re-navigate). Soft failures (storage,
/// color probe, analytics, version parse) never appear here - they are
/// logged where they happen and the session continues.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum SessionError {
    #[error("Invalid movie identity: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("No playable sources found")]
    EmptyResult,

    #[error("Initialization timeout")]
    Timeout,
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SessionError::NetworkError("Request timeout".to_string())
        } else if err.is_connect() {
            SessionError::NetworkError("Failed to connect to lookup service".to_string())
        } else if let Some(status) = err.status() {
            SessionError::NetworkError(format!("HTTP {}: {}", status, err))
        } else if err.is_decode() {
            SessionError::InvalidResponse(err.to_string())
        } else {
            SessionError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::InvalidResponse(err.to_string())
    }
}

// Result type alias for convenience
pub type SessionResult<T> = Result<T, SessionError>;
