//! Story List Reducer
//!
//! Cursor movement over the rendered rows. `len` is the number of stories
//! after the stories reducer has run.

use crate::actions::StoryListAction;
use crate::state::StoryListState;

pub fn reduce(mut state: StoryListState, action: &StoryListAction, len: usize) -> StoryListState {
    match action {
        StoryListAction::NavigateNext => {
            if len > 0 {
                state.cursor = (state.cursor + 1) % len;
            }
        }
        StoryListAction::NavigatePrevious => {
            if len > 0 {
                state.cursor = if state.cursor == 0 {
                    len - 1
                } else {
                    state.cursor - 1
                };
            }
        }
        StoryListAction::NavigateToTop => {
            state.cursor = 0;
        }
        StoryListAction::NavigateToBottom => {
            state.cursor = len.saturating_sub(1);
        }
        // Resolved by middleware against the selected row
        StoryListAction::DismissSelected | StoryListAction::OpenSelected => {}
    }
    clamp(state, len)
}

/// Keep the cursor on an existing row
pub fn clamp(mut state: StoryListState, len: usize) -> StoryListState {
    if state.cursor >= len {
        state.cursor = len.saturating_sub(1);
    }
    state
}
