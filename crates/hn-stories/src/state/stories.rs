//! Stories state

use crate::actions::RequestId;
use hn_client::Hit;

/// The fetched story collection and its fetch lifecycle flags
///
/// `is_loading` and `is_error` are never both set once a fetch has finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoriesState {
    pub is_loading: bool,
    pub is_error: bool,
    pub data: Vec<Hit>,
    /// Request whose response will be applied; anything else is stale
    pub in_flight: Option<RequestId>,
}
