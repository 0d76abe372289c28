//! Wire and domain shapes for the source lookup API.

use serde::{Deserialize, Serialize};

/// Lookup API body: `{ "data": [ { iframeUrl, type, dominantColor? } ] }`.
/// A body of any other shape is an invalid response.
#[derive(Debug, Deserialize)]
pub(crate) struct SourceListResponse {
    pub data: Vec<SourceDto>,
}

/// One raw record as the API sends it. Fields are optional on the wire;
/// records missing a URL or label are dropped during normalization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SourceDto {
    #[serde(default)]
    pub iframe_url: Option<String>,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub dominant_color: Option<String>,
}

/// One playable candidate. Created fresh on every resolution call and held
/// in memory for the current session only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    pub provider_type: String,
    pub embed_url: String,
    pub dominant_color: Option<String>,
}
