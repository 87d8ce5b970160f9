//! View model for the story list
//!
//! Separates presentation logic from the fetched hits and view rendering.
//! Rows follow the order of the fetched data.

use crate::state::AppState;
use hn_client::Hit;

/// View model for the whole list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryListViewModel {
    pub rows: Vec<StoryRowViewModel>,
    /// Current cursor position (for keyboard navigation)
    pub selected_index: usize,
}

/// View model for a single story row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowViewModel {
    pub title: String,
    pub author: String,
    pub comments: String,
    pub points: String,
}

impl StoryListViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        Self {
            rows: state.stories.data.iter().map(StoryRowViewModel::from_hit).collect(),
            selected_index: state.story_list.cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl StoryRowViewModel {
    pub fn from_hit(hit: &Hit) -> Self {
        Self {
            title: hit.display_title().to_string(),
            author: hit.author.clone(),
            comments: hit.comment_count().to_string(),
            points: hit.point_count().to_string(),
        }
    }
}
