//! Default-choice policy and user-driven source switching.

use std::sync::Arc;

use log::{debug, warn};

use crate::modules::provider::SourceRecord;
use crate::modules::session::traits::{ColorProbe, Presentation};
use crate::modules::store::{PersistentStore, PREFERRED_SOURCE_KEY};

/// Accent applied when a source carries no color hint and the probe yields
/// nothing.
pub const FALLBACK_ACCENT: &str = "rgba(255,255,255,0.3)";

/// Index of the stored preference in `sources` (exact, case-sensitive match
/// on the provider type); first entry otherwise.
pub fn default_index(sources: &[SourceRecord], stored_preference: Option<&str>) -> usize {
    stored_preference
        .and_then(|preferred| {
            sources
                .iter()
                .position(|source| source.provider_type == preferred)
        })
        .unwrap_or(0)
}

/// Active-source state for one resolved session.
pub struct SourceSelection {
    sources: Vec<SourceRecord>,
    active: usize,
    store: Arc<dyn PersistentStore>,
    presentation: Arc<dyn Presentation>,
    color_probe: Arc<dyn ColorProbe>,
}

impl SourceSelection {
    /// Render the source list and activate the default choice. Default
    /// activation never writes the preference; only explicit user picks do.
    pub fn present(
        sources: Vec<SourceRecord>,
        store: Arc<dyn PersistentStore>,
        presentation: Arc<dyn Presentation>,
        color_probe: Arc<dyn ColorProbe>,
    ) -> Self {
        let preferred = match store.get(PREFERRED_SOURCE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Preferred source unavailable: {}", e);
                None
            }
        };

        let active = default_index(&sources, preferred.as_deref());
        let selection = Self {
            sources,
            active,
            store,
            presentation,
            color_probe,
        };
        selection
            .presentation
            .render_source_list(&selection.sources, selection.active);
        selection.activate(selection.active);
        selection
    }

    pub fn sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// User-driven switch. Re-selecting the active index is a no-op; any
    /// other valid index activates that source and persists its provider
    /// type as the new preference (best-effort).
    pub fn select(&mut self, index: usize) {
        if index == self.active || index >= self.sources.len() {
            return;
        }

        self.active = index;
        self.presentation
            .render_source_list(&self.sources, self.active);

        let provider_type = &self.sources[index].provider_type;
        if let Err(e) = self.store.set(PREFERRED_SOURCE_KEY, provider_type) {
            warn!("Failed to persist preferred source: {}", e);
        }
        debug!("User selected source \"{}\"", provider_type);

        self.activate(index);
    }

    fn activate(&self, index: usize) {
        let source = &self.sources[index];
        self.presentation.render_embed(source);

        if let Some(color) = &source.dominant_color {
            self.presentation.apply_accent(color);
            return;
        }

        // Detached best-effort probe; a miss falls back to the fixed accent.
        let probe = Arc::clone(&self.color_probe);
        let presentation = Arc::clone(&self.presentation);
        let source = source.clone();
        tokio::spawn(async move {
            let color = probe
                .dominant_color(&source)
                .await
                .unwrap_or_else(|| FALLBACK_ACCENT.to_string());
            presentation.apply_accent(&color);
        });
    }
}
