//! Session state machine.
//!
//! Owns the initialization sequence, the startup watchdog, failure
//! mapping onto the host presentation, and user-driven source switching.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::{error, info, warn};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::modules::identity::{compute_key, MovieIdentity};
use crate::modules::provider::SourceProvider;
use crate::modules::selection::SourceSelection;
use crate::modules::session::config::SessionConfig;
use crate::modules::session::title::title_markup;
use crate::modules::session::traits::{
    AddressState, Analytics, AnalyticsPayload, AnalyticsProps, ColorProbe, MessageKind,
    Presentation,
};
use crate::modules::session::version::check_version;
use crate::modules::store::{PersistentStore, PREFERRED_SOURCE_KEY};
use crate::shared::errors::{SessionError, SessionResult};

/// Address parameter carrying the cache key across reloads.
pub const MOVIE_PARAM: &str = "movie";

const PLAYER_SAD_TEXT: &str = ":(";
const NOT_FOUND_TEXT: &str = "Movie not found :(";
const ANALYTICS_EVENT: &str = "pageview";

/// Externally observable lifecycle of one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Initializing,
    Ready,
    Failed(FailReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    Timeout,
    NetworkError,
    EmptyResult,
    InvalidInput,
    InvalidResponse,
}

impl From<&SessionError> for FailReason {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::InvalidInput(_) => FailReason::InvalidInput,
            SessionError::NetworkError(_) => FailReason::NetworkError,
            SessionError::InvalidResponse(_) => FailReason::InvalidResponse,
            SessionError::EmptyResult => FailReason::EmptyResult,
            SessionError::Timeout => FailReason::Timeout,
        }
    }
}

/// One controller instance per page load. All flags that were module-level
/// globals in earlier incarnations live on the instance.
pub struct SessionController {
    config: SessionConfig,
    store: Arc<dyn PersistentStore>,
    provider: Arc<dyn SourceProvider>,
    presentation: Arc<dyn Presentation>,
    analytics: Arc<dyn Analytics>,
    address: Arc<dyn AddressState>,
    color_probe: Arc<dyn ColorProbe>,
    state: Mutex<SessionState>,
    selection: Mutex<Option<SourceSelection>>,
    initialized: AtomicBool,
    watchdog: CancellationToken,
}

impl SessionController {
    /// Construct the controller and arm the startup watchdog. Must run
    /// inside a tokio runtime (the watchdog is a spawned task).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: SessionConfig,
        store: Arc<dyn PersistentStore>,
        provider: Arc<dyn SourceProvider>,
        presentation: Arc<dyn Presentation>,
        analytics: Arc<dyn Analytics>,
        address: Arc<dyn AddressState>,
        color_probe: Arc<dyn ColorProbe>,
    ) -> Arc<Self> {
        let controller = Arc::new(Self {
            config,
            store,
            provider,
            presentation,
            analytics,
            address,
            color_probe,
            state: Mutex::new(SessionState::Idle),
            selection: Mutex::new(None),
            initialized: AtomicBool::new(false),
            watchdog: CancellationToken::new(),
        });
        controller.spawn_watchdog();
        controller
    }

    /// One-shot guard against the host never calling [`init`]. Firing only
    /// presents the script-error message; it aborts nothing in flight, and
    /// a later `init` on a never-initialized page is still accepted.
    fn spawn_watchdog(self: &Arc<Self>) {
        let controller = Arc::clone(self);
        let token = self.watchdog.clone();
        let timeout = self.config.watchdog_timeout;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(timeout) => {
                    error!("Initialization timeout");
                    controller.presentation.show_message(MessageKind::ScriptError);
                    if let Ok(mut state) = controller.state.lock() {
                        if *state == SessionState::Idle {
                            *state = SessionState::Failed(FailReason::Timeout);
                        }
                    }
                }
            }
        });
    }

    /// Entry point invoked by the host page, or by [`resume`] after a
    /// reload. `data` is the raw identity object; `client_version` is the
    /// host userscript version when the host has one.
    ///
    /// Re-initialization is a no-op except from `Idle` or after a watchdog
    /// timeout on a never-initialized page.
    pub async fn init(&self, data: Value, client_version: Option<&str>) -> SessionResult<()> {
        if self.initialized.load(Ordering::SeqCst) || !self.accepts_init() {
            return Ok(());
        }

        self.watchdog.cancel();
        self.presentation.clear_messages();
        self.set_state(SessionState::Initializing);

        match self.run_init(data, client_version).await {
            Ok(()) => {
                self.initialized.store(true, Ordering::SeqCst);
                self.set_state(SessionState::Ready);
                Ok(())
            }
            Err(err) => {
                self.present_failure(&err);
                self.set_state(SessionState::Failed(FailReason::from(&err)));
                Err(err)
            }
        }
    }

    async fn run_init(&self, data: Value, client_version: Option<&str>) -> SessionResult<()> {
        let identity = MovieIdentity::parse(&data)?;
        let serialized = identity.canonical_json();
        info!("Initialization started: {}", serialized);

        let key = compute_key(&serialized).to_string();
        if let Err(e) = self.store.set(&key, &serialized) {
            warn!("Failed to cache movie identity: {}", e);
        }
        self.address.set_param(MOVIE_PARAM, &key);

        let sources = self.provider.fetch_sources(&identity).await?;
        if sources.is_empty() {
            return Err(SessionError::EmptyResult);
        }

        let selection = SourceSelection::present(
            sources,
            Arc::clone(&self.store),
            Arc::clone(&self.presentation),
            Arc::clone(&self.color_probe),
        );
        if let Ok(mut slot) = self.selection.lock() {
            *slot = Some(selection);
        }

        if let Some(title) = identity.title.as_deref() {
            self.presentation.set_page_title(title, &title_markup(title));
            self.emit_pageview(&identity);
        }

        if let Some(client_version) = client_version {
            if let Some(outdated) = check_version(&self.config.required_version, client_version) {
                self.presentation.show_message(MessageKind::ScriptOutdated {
                    client_version: outdated,
                });
            }
        }

        Ok(())
    }

    /// Reload bootstrap: re-enter [`init`] from the cache key in the
    /// address bar. Every miss here is soft - the page simply starts
    /// unresolved, waiting for the host to call `init` itself.
    pub async fn resume(&self) -> SessionResult<()> {
        info!("Setup started");
        let Some(movie_key) = self.address.get_param(MOVIE_PARAM) else {
            return Ok(());
        };

        let cached = match self.store.get(&movie_key) {
            Ok(Some(cached)) => cached,
            Ok(None) => {
                error!("Cached identity with key \"{}\" not found", movie_key);
                return Ok(());
            }
            Err(e) => {
                warn!("Cache lookup failed for key \"{}\": {}", movie_key, e);
                return Ok(());
            }
        };

        let data: Value = match serde_json::from_str(&cached) {
            Ok(data @ Value::Object(_)) => data,
            Ok(_) => return Ok(()),
            Err(e) => {
                error!("Setup error: {}", e);
                return Ok(());
            }
        };

        info!("Cached identity found for key \"{}\"", movie_key);
        self.init(data, None).await
    }

    /// Host callback for a user pick in the rendered source list.
    pub fn select_source(&self, index: usize) {
        if let Ok(mut slot) = self.selection.lock() {
            if let Some(selection) = slot.as_mut() {
                selection.select(index);
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
            .lock()
            .map(|state| state.clone())
            .unwrap_or(SessionState::Idle)
    }

    /// Provider type and index of the currently active source, if any.
    pub fn active_source(&self) -> Option<(usize, String)> {
        let slot = self.selection.lock().ok()?;
        let selection = slot.as_ref()?;
        Some((
            selection.active_index(),
            selection.sources()[selection.active_index()]
                .provider_type
                .clone(),
        ))
    }

    fn accepts_init(&self) -> bool {
        matches!(
            self.state(),
            SessionState::Idle | SessionState::Failed(FailReason::Timeout)
        )
    }

    fn set_state(&self, next: SessionState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }

    // One user-facing message and one log entry per failure, no retries.
    fn present_failure(&self, err: &SessionError) {
        match err {
            SessionError::NetworkError(_) | SessionError::InvalidResponse(_) => {
                error!("Error fetching data from server: {}", err);
                self.presentation.show_player_text(PLAYER_SAD_TEXT);
                self.presentation.show_message(MessageKind::ServerUnavailable);
            }
            SessionError::EmptyResult => {
                info!("No playable sources for this identity");
                self.presentation.show_player_text(NOT_FOUND_TEXT);
            }
            SessionError::InvalidInput(_) | SessionError::Timeout => {
                error!("Error during initialization: {}", err);
                self.presentation.show_player_text(PLAYER_SAD_TEXT);
                self.presentation
                    .show_message(MessageKind::InitializationError);
            }
        }
    }

    fn emit_pageview(&self, identity: &MovieIdentity) {
        let Some(title) = identity.title.as_deref() else {
            return;
        };
        let title = title.trim().to_lowercase();
        if title.is_empty() {
            return;
        }

        let preferred_source = match self.store.get(PREFERRED_SOURCE_KEY) {
            Ok(value) => value.map(|preferred| preferred.to_lowercase()),
            Err(e) => {
                warn!("Preferred source unavailable for analytics: {}", e);
                None
            }
        };

        self.analytics.emit(
            ANALYTICS_EVENT,
            AnalyticsPayload {
                u: title,
                props: AnalyticsProps {
                    id_type: identity.id_type().map(str::to_string),
                    preferred_source,
                },
            },
        );
    }
}
