use std::time::Duration;

/// Lookup endpoint of the public source API.
pub const DEFAULT_API_URL: &str = "https://api.kinobox.tv/api/players";

/// Host userscript version this build expects.
pub const REQUIRED_CLIENT_VERSION: &str = "1.4.0";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub api_url: String,
    pub required_version: String,
    /// How long the page may sit idle before the "script failed to start"
    /// presentation fires.
    pub watchdog_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            required_version: REQUIRED_CLIENT_VERSION.to_string(),
            watchdog_timeout: Duration::from_secs(5),
        }
    }
}
