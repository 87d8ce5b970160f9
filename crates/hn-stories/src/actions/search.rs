//! Search actions
//!
//! Changes to the search term and the committed request url.

/// Root-level search actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Replace the search term (mirrored to storage)
    SetTerm(String),
    /// A new request url has been committed; the fetch follows as an event
    UrlCommitted(String),
}
