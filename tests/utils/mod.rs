//! Shared in-memory collaborators for controller integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tape_operator::{
    Analytics, AnalyticsPayload, ColorProbe, InMemoryAddressState, MemoryStore, MessageKind,
    MovieIdentity, NoopColorProbe, Presentation, SessionConfig, SessionController, SessionError,
    SessionResult, SourceProvider, SourceRecord,
};

/// Everything the controller did to the page, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    SourceList(Vec<String>, usize),
    Embed(String),
    Message(MessageKind),
    PlayerText(String),
    Title(String, String),
    Accent(String),
    Clear,
}

#[derive(Default)]
pub struct FakePage {
    pub events: Mutex<Vec<PageEvent>>,
}

impl FakePage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: PageEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Presentation for FakePage {
    fn render_source_list(&self, sources: &[SourceRecord], active_index: usize) {
        let labels = sources.iter().map(|s| s.provider_type.clone()).collect();
        self.push(PageEvent::SourceList(labels, active_index));
    }

    fn render_embed(&self, source: &SourceRecord) {
        self.push(PageEvent::Embed(source.embed_url.clone()));
    }

    fn show_message(&self, kind: MessageKind) {
        self.push(PageEvent::Message(kind));
    }

    fn show_player_text(&self, text: &str) {
        self.push(PageEvent::PlayerText(text.to_string()));
    }

    fn set_page_title(&self, title: &str, markup: &str) {
        self.push(PageEvent::Title(title.to_string(), markup.to_string()));
    }

    fn apply_accent(&self, color: &str) {
        self.push(PageEvent::Accent(color.to_string()));
    }

    fn clear_messages(&self) {
        self.push(PageEvent::Clear);
    }
}

/// Provider stub returning a fixed list and recording each identity asked.
pub struct StaticProvider {
    sources: Vec<SourceRecord>,
    pub requests: Mutex<Vec<MovieIdentity>>,
}

impl StaticProvider {
    pub fn new(sources: Vec<SourceRecord>) -> Arc<Self> {
        Arc::new(Self {
            sources,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SourceProvider for StaticProvider {
    async fn fetch_sources(&self, identity: &MovieIdentity) -> SessionResult<Vec<SourceRecord>> {
        self.requests.lock().unwrap().push(identity.clone());
        Ok(self.sources.clone())
    }
}

pub struct FailingProvider {
    pub error: SessionError,
}

#[async_trait]
impl SourceProvider for FailingProvider {
    async fn fetch_sources(&self, _identity: &MovieIdentity) -> SessionResult<Vec<SourceRecord>> {
        Err(self.error.clone())
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    pub events: Mutex<Vec<(String, AnalyticsPayload)>>,
}

impl Analytics for RecordingAnalytics {
    fn emit(&self, event: &str, payload: AnalyticsPayload) {
        self.events.lock().unwrap().push((event.to_string(), payload));
    }
}

/// Probe resolving to a fixed color.
pub struct FixedColorProbe(pub &'static str);

#[async_trait]
impl ColorProbe for FixedColorProbe {
    async fn dominant_color(&self, _source: &SourceRecord) -> Option<String> {
        Some(self.0.to_string())
    }
}

pub fn source(provider_type: &str) -> SourceRecord {
    SourceRecord {
        provider_type: provider_type.to_string(),
        embed_url: format!("https://{}/embed", provider_type),
        dominant_color: Some(format!("#{}00", provider_type.len())),
    }
}

pub fn source_without_color(provider_type: &str) -> SourceRecord {
    SourceRecord {
        dominant_color: None,
        ..source(provider_type)
    }
}

/// Controller wired to the shared fakes, default config unless overridden.
pub struct Harness {
    pub controller: Arc<SessionController>,
    pub page: Arc<FakePage>,
    pub store: Arc<MemoryStore>,
    pub address: Arc<InMemoryAddressState>,
    pub analytics: Arc<RecordingAnalytics>,
}

pub fn harness(provider: Arc<dyn SourceProvider>, config: SessionConfig) -> Harness {
    let page = FakePage::new();
    let store = Arc::new(MemoryStore::new());
    let address = Arc::new(InMemoryAddressState::new());
    let analytics = Arc::new(RecordingAnalytics::default());
    let controller = SessionController::new(
        config,
        store.clone(),
        provider,
        page.clone(),
        analytics.clone(),
        address.clone(),
        Arc::new(NoopColorProbe),
    );
    Harness {
        controller,
        page,
        store,
        address,
        analytics,
    }
}
