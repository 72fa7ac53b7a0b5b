//! # Recommendation Backend Client
//!
//! Implements the `RecommendationBackend` trait over HTTP/JSON using `reqwest`.
//! Each call performs exactly one POST with an explicit deadline; there are no retries and no caching.
//! Responses and failures are folded into `RemoteError` so callers only deal with one error type.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::config::BackendConfig;
use crate::domain::error::RemoteError;
use crate::domain::traits::RecommendationBackend;
use crate::domain::types::{ClassifyResult, SearchKind, SearchResult};
use crate::strings::messages::NO_SEARCH_RESULTS;

pub const CLASSIFY_PATH: &str = "/api/tool/classify-spotify-query";
pub const SEARCH_PATH: &str = "/api/tool/search-spotify";

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    #[serde(rename = "type")]
    kind: SearchKind,
    keyword: &'a str,
}

/// Success shape shared by both endpoints: `{content: [{type?, text}, ...]}`. Only `text` is read.
#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    content: Option<Vec<ContentItem>>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(default)]
    text: String,
}

impl ContentResponse {
    /// First non-empty `text` of the first content item.
    fn first_text(self) -> Option<String> {
        self.content
            .and_then(|items| items.into_iter().next())
            .map(|item| item.text)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: String,
}

pub struct BackendClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout_secs: u64, token: Option<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(config: &BackendConfig, token: Option<String>) -> anyhow::Result<Self> {
        Self::new(&config.base_url, config.timeout_secs, token)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, RemoteError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_slice::<ErrorResponse>(&bytes)
                && !err.error.is_empty()
            {
                return Err(RemoteError::BackendReported(err.error));
            }
            return Err(RemoteError::HttpStatus(status.as_u16()));
        }

        decode_object(&bytes)
    }
}

/// Decodes a success body, which must be a JSON object. Serde would otherwise accept
/// an array for a derived struct.
fn decode_object<R: DeserializeOwned>(bytes: &[u8]) -> Result<R, RemoteError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| RemoteError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Err(RemoteError::Decode(format!(
            "expected a JSON object, got: {value}"
        )));
    }
    serde_json::from_value(value).map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait]
impl RecommendationBackend for BackendClient {
    async fn classify(&self, query: &str) -> Result<ClassifyResult, RemoteError> {
        let response: ContentResponse = self
            .post_json(CLASSIFY_PATH, &ClassifyRequest { query })
            .await?;

        response
            .first_text()
            .map(|keyword| ClassifyResult { keyword })
            .ok_or(RemoteError::Empty)
    }

    async fn search(&self, kind: SearchKind, keyword: &str) -> Result<SearchResult, RemoteError> {
        let response: ContentResponse = self
            .post_json(SEARCH_PATH, &SearchRequest { kind, keyword })
            .await?;

        // No hits is a normal answer for search, unlike an empty classification.
        let display_text = response
            .first_text()
            .unwrap_or_else(|| NO_SEARCH_RESULTS.to_string());
        Ok(SearchResult { display_text })
    }
}
