//! Kinobox lookup API client

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::modules::identity::MovieIdentity;
use crate::shared::errors::{SessionError, SessionResult};

use super::dto::{SourceDto, SourceListResponse, SourceRecord};
use super::traits::SourceProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "TapeOperator/1.0";

/// Client for the single external lookup endpoint. All identity fields go
/// out as query parameters on one GET request.
pub struct KinoboxClient {
    client: Client,
    base_url: String,
}

impl KinoboxClient {
    pub fn new(base_url: &str) -> SessionResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                SessionError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SourceProvider for KinoboxClient {
    async fn fetch_sources(&self, identity: &MovieIdentity) -> SessionResult<Vec<SourceRecord>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&identity.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::NetworkError(format!(
                "Request failed with status {}",
                status
            )));
        }

        let body = response
            .json::<SourceListResponse>()
            .await
            .map_err(|e| SessionError::InvalidResponse(format!("Unexpected body shape: {}", e)))?;

        let sources = normalize_sources(body.data);
        debug!("Lookup returned {} usable source(s)", sources.len());
        Ok(sources)
    }
}

/// Drop records lacking a usable embed URL or provider label, then demote
/// the first case-insensitive "turbo" record to the end of the list.
/// Relative order of everything else is preserved; default selection
/// (first entry unless a preference matches) counts on this ordering.
pub(crate) fn normalize_sources(raw: Vec<SourceDto>) -> Vec<SourceRecord> {
    let mut sources: Vec<SourceRecord> = raw
        .into_iter()
        .filter_map(|dto| {
            let embed_url = dto.iframe_url.filter(|url| !url.is_empty())?;
            let provider_type = dto.r#type.filter(|label| !label.is_empty())?;
            Some(SourceRecord {
                provider_type,
                embed_url,
                dominant_color: dto.dominant_color,
            })
        })
        .collect();

    if let Some(turbo_index) = sources
        .iter()
        .position(|source| source.provider_type.eq_ignore_ascii_case("turbo"))
    {
        let turbo = sources.remove(turbo_index);
        sources.push(turbo);
    }

    sources
}
