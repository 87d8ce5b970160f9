//! Story list state

/// Cursor over the rendered rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoryListState {
    pub cursor: usize,
}
