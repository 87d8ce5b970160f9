//! Stories Reducer
//!
//! Pure state transitions for the fetched story collection.
//!
//! | action        | effect                                                     |
//! |---------------|------------------------------------------------------------|
//! | FetchInit     | loading, error cleared, request becomes the current one    |
//! | FetchSuccess  | data replaced, loading and error cleared                   |
//! | FetchFailure  | error set, loading cleared, data kept                      |
//! | Remove        | every story with the objectID dropped, order kept          |
//!
//! Success and failure are only applied for the current request. A response
//! for any other request is stale and leaves the state untouched.

use crate::actions::{RequestId, StoriesAction};
use crate::state::StoriesState;

pub fn reduce(mut state: StoriesState, action: &StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit { request } => {
            state.is_loading = true;
            state.is_error = false;
            state.in_flight = Some(*request);
            log::debug!("Stories fetch {} started", request);
        }

        StoriesAction::FetchSuccess { request, hits } => {
            if is_stale(&state, *request) {
                return state;
            }
            state.is_loading = false;
            state.is_error = false;
            state.data = hits.clone();
            state.in_flight = None;
            log::info!("Loaded {} stories (request {})", hits.len(), request);
        }

        StoriesAction::FetchFailure { request } => {
            if is_stale(&state, *request) {
                return state;
            }
            state.is_loading = false;
            state.is_error = true;
            state.in_flight = None;
            log::warn!("Stories fetch {} failed", request);
        }

        StoriesAction::Remove { object_id } => {
            let before = state.data.len();
            state.data.retain(|hit| &hit.object_id != object_id);
            log::debug!(
                "Removed {} story(ies) with objectID {}",
                before - state.data.len(),
                object_id
            );
        }
    }

    state
}

fn is_stale(state: &StoriesState, request: RequestId) -> bool {
    if state.in_flight == Some(request) {
        return false;
    }
    log::debug!(
        "Ignoring stale response for request {} (current: {:?})",
        request,
        state.in_flight
    );
    true
}
