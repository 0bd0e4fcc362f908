use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use crate::config::{ApiKey, ProviderConfig, MAX_SEARCH_LIMIT};
use crate::provider::error::ProviderError;
use crate::provider::types::{Gif, SearchResponse};

/// Path of the search endpoint, appended to `provider.base_url`.
pub const SEARCH_PATH: &str = "/v1/gifs/search";

/// HTTP client for the Giphy search endpoint.
#[derive(Debug, Clone)]
pub struct GiphyClient {
    client: Client,
    search_url: Url,
    api_key: ApiKey,
    default_limit: u32,
}

impl GiphyClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_blank())
            .ok_or(ProviderError::MissingApiKey)?;

        let raw_url = format!("{}{}", config.base_url.trim_end_matches('/'), SEARCH_PATH);
        let search_url = Url::parse(&raw_url).map_err(|e| ProviderError::InvalidUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|source| ProviderError::ClientBuild { source })?;

        Ok(Self {
            client,
            search_url,
            api_key,
            default_limit: config.limit,
        })
    }

    /// Search for gifs matching `query`.
    ///
    /// Issues a single `GET` with `q`, `api_key` and `limit` query
    /// parameters. `limit` falls back to the configured default and is
    /// clamped to the range the provider accepts.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<Gif>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProviderError::EmptyQuery);
        }
        let limit = limit
            .unwrap_or(self.default_limit)
            .clamp(1, MAX_SEARCH_LIMIT);

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("api_key", self.api_key.expose())
            .append_pair("limit", &limit.to_string());

        debug!(query, limit, "Sending search request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(transport_error)?;
        let payload: SearchResponse =
            serde_json::from_slice(&body).map_err(|source| ProviderError::Decode { source })?;
        let gifs = payload.into_gifs()?;

        debug!(query, count = gifs.len(), "Search response decoded");
        Ok(gifs)
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }
}

/// reqwest puts the request URL in its messages, and ours carries `api_key`.
fn transport_error(source: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        source: source.without_url(),
    }
}
