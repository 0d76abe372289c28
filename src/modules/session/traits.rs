//! Collaborator boundaries owned by the host page.
//!
//! The controller only talks to the page through these traits, so tests
//! (and headless hosts) can substitute in-memory implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::provider::SourceRecord;

/// Transient host-page messages, one per user-facing failure surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    InitializationError,
    ScriptError,
    ScriptOutdated { client_version: String },
    ServerUnavailable,
}

/// Rendering surface supplied by the host page.
pub trait Presentation: Send + Sync {
    fn render_source_list(&self, sources: &[SourceRecord], active_index: usize);
    fn render_embed(&self, source: &SourceRecord);
    fn show_message(&self, kind: MessageKind);
    /// Short text shown inside the player area itself.
    fn show_player_text(&self, text: &str);
    /// `markup` is `title` with its parenthesized suffix wrapped in a span.
    fn set_page_title(&self, title: &str, markup: &str);
    fn apply_accent(&self, color: &str);
    /// Remove transient messages left over from a previous attempt.
    fn clear_messages(&self);
}

/// Payload for the fire-and-forget analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsPayload {
    /// Trimmed, lowercased display title.
    pub u: String,
    pub props: AnalyticsProps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyticsProps {
    #[serde(rename = "id-type", skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,
    #[serde(rename = "preferred-source", skip_serializing_if = "Option::is_none")]
    pub preferred_source: Option<String>,
}

/// Fire-and-forget event sink; implementations swallow their own failures.
pub trait Analytics: Send + Sync {
    fn emit(&self, event: &str, payload: AnalyticsPayload);
}

/// Address-bar state carrying the cache key across reloads.
pub trait AddressState: Send + Sync {
    fn get_param(&self, key: &str) -> Option<String>;
    fn set_param(&self, key: &str, value: &str);
}

/// In-memory address state for tests and headless hosts.
#[derive(Debug, Default)]
pub struct InMemoryAddressState {
    params: Mutex<HashMap<String, String>>,
}

impl InMemoryAddressState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddressState for InMemoryAddressState {
    fn get_param(&self, key: &str) -> Option<String> {
        self.params.lock().ok()?.get(key).cloned()
    }

    fn set_param(&self, key: &str, value: &str) {
        if let Ok(mut params) = self.params.lock() {
            params.insert(key.to_string(), value.to_string());
        }
    }
}

/// Best-effort dominant-color extraction from a rendered source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColorProbe: Send + Sync {
    /// `None` means no color could be produced; callers fall back to
    /// [`FALLBACK_ACCENT`](crate::modules::selection::FALLBACK_ACCENT).
    async fn dominant_color(&self, source: &SourceRecord) -> Option<String>;
}

/// Probe that never produces a color, so the fallback accent always applies.
#[derive(Debug, Default)]
pub struct NoopColorProbe;

#[async_trait]
impl ColorProbe for NoopColorProbe {
    async fn dominant_color(&self, _source: &SourceRecord) -> Option<String> {
        None
    }
}
