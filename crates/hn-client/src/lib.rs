//! Hacker News search API client
//!
//! This crate provides a trait-based client for the Algolia-powered Hacker News
//! search API. The application only ever talks to the `SearchClient` trait, so
//! tests can swap in a fake without touching the network.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchClient trait                  │
//! │  - search(url) -> SearchResponse                 │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ AlgoliaClient   │         │ test fakes          │
//! │ (reqwest)       │         │ (canned responses)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use hn_client::{search_url, AlgoliaClient, SearchClient, DEFAULT_API_ENDPOINT};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = AlgoliaClient::new(Duration::from_secs(10))?;
//! let url = search_url(DEFAULT_API_ENDPOINT, "rust");
//! let response = client.search(&url).await?;
//! println!("{} hits", response.hits.len());
//! # Ok(())
//! # }
//! ```

pub mod algolia_client;
pub mod client;
pub mod error;
pub mod types;

/// Default search endpoint; the encoded query is appended verbatim
pub const DEFAULT_API_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Base URL for story pages on Hacker News itself
pub const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

pub use algolia_client::AlgoliaClient;
pub use client::SearchClient;
pub use error::SearchError;
pub use types::{HighlightField, HighlightResult, Hit, MatchLevel, SearchResponse};

/// Build the request URL for a search term
///
/// The term is percent-encoded and appended to the endpoint, which is expected
/// to end with the query parameter name (e.g. `...search?query=`).
pub fn search_url(endpoint: &str, term: &str) -> String {
    format!("{}{}", endpoint, urlencoding::encode(term))
}
