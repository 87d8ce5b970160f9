//! Event types
//!
//! Events represent facts that have occurred and should be broadcast to the
//! middleware chain. Unlike commands (imperative actions), events allow
//! middleware to react to what happened elsewhere in the system.
//!
//! ## Naming Convention
//!
//! Events use past tense or descriptive names indicating something has happened:
//! - `Mounted` (not `Mount`)
//! - `UrlChanged` (not `ChangeUrl`)

/// Events observed by middleware only
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The first frame has been rendered
    Mounted,

    /// A new request url has been committed
    UrlChanged(String),
}
