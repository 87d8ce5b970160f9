//! Stories actions
//!
//! The fetch lifecycle of the story collection plus local removal. Every fetch
//! carries the `RequestId` it was started with so that responses from a
//! superseded request can be told apart from the current one.

use hn_client::Hit;
use std::fmt;

/// Identifier of one fetch, increasing per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Actions for the stories reducer
#[derive(Debug, Clone, PartialEq)]
pub enum StoriesAction {
    /// A fetch has started
    FetchInit { request: RequestId },
    /// A fetch resolved with hits
    FetchSuccess { request: RequestId, hits: Vec<Hit> },
    /// A fetch failed for any reason
    FetchFailure { request: RequestId },
    /// Remove every story with this objectID
    Remove { object_id: String },
}
