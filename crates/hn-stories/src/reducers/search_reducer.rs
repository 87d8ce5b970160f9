//! Search Reducer
//!
//! Handles the search term and the committed request url.

use crate::actions::SearchAction;
use crate::state::SearchState;

pub fn reduce(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::SetTerm(term) => {
            state.term = term.clone();
        }
        SearchAction::UrlCommitted(url) => {
            log::debug!("Committed search url {}", url);
            state.url = url.clone();
        }
    }
    state
}
