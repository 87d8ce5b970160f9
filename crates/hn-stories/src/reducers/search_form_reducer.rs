//! Search Form Reducer
//!
//! Only focus lives here. Edits of the term are turned into
//! `SearchAction::SetTerm` by the search form middleware.

use crate::actions::SearchFormAction;
use crate::state::{Focus, SearchFormState};

pub fn reduce(mut state: SearchFormState, action: &SearchFormAction) -> SearchFormState {
    match action {
        SearchFormAction::Focus => state.focus = Focus::SearchInput,
        SearchFormAction::Blur => state.focus = Focus::StoryList,
        SearchFormAction::ToggleFocus => state.focus = state.focus.toggle(),
        SearchFormAction::Char(_)
        | SearchFormAction::Backspace
        | SearchFormAction::ClearLine
        | SearchFormAction::Submit => {}
    }
    state
}
