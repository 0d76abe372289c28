use async_trait::async_trait;

use crate::modules::identity::MovieIdentity;
use crate::shared::errors::SessionResult;

use super::dto::SourceRecord;

/// Resolves a movie identity into an ordered list of playable sources.
///
/// The order is significant: default selection falls back to the first
/// entry, and implementations demote the designated high-bandwidth
/// provider to the end (see [`KinoboxClient`](super::KinoboxClient)).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// Single network lookup. An empty result means "no sources found",
    /// not an error.
    async fn fetch_sources(&self, identity: &MovieIdentity) -> SessionResult<Vec<SourceRecord>>;
}
