//! Application State

use crate::keybindings::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{StoriesView, View};
use hn_client::Hit;
use hn_stories_config::AppConfig;

use super::{SearchFormState, SearchState, StoriesState, StoryListState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub search: SearchState,
    pub search_form: SearchFormState,
    pub stories: StoriesState,
    pub story_list: StoryListState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
}

impl AppState {
    /// Initial state for a given (restored) search term
    pub fn new(search_term: &str, config: &AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(StoriesView::new())],
            search: SearchState::new(config.api_endpoint.clone(), search_term),
            search_form: SearchFormState::default(),
            stories: StoriesState::default(),
            story_list: StoryListState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }

    /// The story under the list cursor, if any
    pub fn selected_story(&self) -> Option<&Hit> {
        self.stories.data.get(self.story_list.cursor)
    }
}
