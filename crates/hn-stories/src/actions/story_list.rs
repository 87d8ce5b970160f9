//! Story list actions
//!
//! Cursor movement plus the two per-item commands. The `*Selected` variants
//! are resolved against the row under the cursor by middleware.

/// Actions for the story list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Dismiss the story under the cursor
    DismissSelected,
    /// Open the story under the cursor in the browser
    OpenSelected,
}
