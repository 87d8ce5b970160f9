//! View model for the search form

use crate::state::AppState;

/// Display data for the labeled input and its submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormViewModel {
    pub input_id: &'static str,
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    /// Submit is disabled while the term is empty
    pub submit_enabled: bool,
    pub submit_label: String,
}

impl SearchFormViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            input_id: state.search_form.input_id,
            label: state.search_form.label.to_string(),
            value: state.search.term.clone(),
            is_focused: state.search_form.input_focused(),
            submit_enabled: state.search.can_submit(),
            submit_label: "[ Submit ]".to_string(),
        }
    }
}
