//! Search client errors

use thiserror::Error;

/// Everything that can go wrong while running a search request
///
/// The application collapses all of these into a single "failed" flag, but the
/// variants keep enough detail for the log file.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection, TLS, timeout or body transfer failure
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code
    #[error("search API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not a valid search payload
    #[error("failed to decode search response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
