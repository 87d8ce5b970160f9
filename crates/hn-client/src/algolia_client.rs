//! Direct API client implementation using reqwest
//!
//! This is the "real" client that talks to the Algolia HN search endpoint.
//! It has no caching and no retry: one call is one GET.

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::types::SearchResponse;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

/// Search client backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    http: reqwest::Client,
}

impl AlgoliaClient {
    /// Create a new client with the given per-request timeout
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hacker-stories/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    async fn search(&self, url: &str) -> Result<SearchResponse, SearchError> {
        log::debug!("AlgoliaClient: GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| SearchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| SearchError::Request {
                url: url.to_string(),
                source,
            })?;

        let parsed = decode_response(url, &body)?;
        log::debug!(
            "AlgoliaClient: {} hits (nbHits={:?}, {:?}ms)",
            parsed.hits.len(),
            parsed.nb_hits,
            parsed.processing_time_ms
        );
        Ok(parsed)
    }
}

/// Decode a raw response body
pub fn decode_response(url: &str, body: &[u8]) -> Result<SearchResponse, SearchError> {
    serde_json::from_slice(body).map_err(|source| SearchError::Decode {
        url: url.to_string(),
        source,
    })
}
