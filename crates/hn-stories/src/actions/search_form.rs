//! Search form actions
//!
//! Screen-specific actions for the labeled search input and its submit control.

/// Actions for the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFormAction {
    /// Character typed into the input
    Char(char),
    /// Remove the last character
    Backspace,
    /// Clear the whole input
    ClearLine,
    /// Submit the form
    Submit,
    /// Move keyboard focus into the input
    Focus,
    /// Move keyboard focus back to the story list
    Blur,
    /// Switch focus between input and list
    ToggleFocus,
}
