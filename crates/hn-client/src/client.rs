//! Search client trait
//!
//! Defines the `SearchClient` trait that every client implementation must
//! satisfy. The application owns one boxed client and never names the
//! concrete type.

use crate::error::SearchError;
use crate::types::SearchResponse;
use async_trait::async_trait;

/// Search API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared by
/// every spawned fetch task.
///
/// # Example
///
/// ```rust,ignore
/// use hn_client::{SearchClient, Hit};
///
/// async fn titles(client: &dyn SearchClient, url: &str) -> Vec<String> {
///     match client.search(url).await {
///         Ok(response) => response.hits.iter().map(|h| h.display_title().to_string()).collect(),
///         Err(_) => Vec::new(),
///     }
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Issue one GET against a fully built search URL
    ///
    /// # Arguments
    ///
    /// * `url` - endpoint plus encoded query, see [`crate::search_url`]
    ///
    /// # Returns
    ///
    /// The decoded response, or the reason the request failed.
    async fn search(&self, url: &str) -> Result<SearchResponse, SearchError>;
}
