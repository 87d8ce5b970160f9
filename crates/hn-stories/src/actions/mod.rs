//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput, ViewContext) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Domain actions that are already targeted to a particular slice of state

// Shared action types
pub mod context_action;
pub mod event;
pub mod global;
pub mod navigation;
pub mod text_input;

// Domain action types
pub mod search;
pub mod search_form;
pub mod stories;
pub mod story_list;

pub use context_action::ContextAction;
pub use event::Event;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use search::SearchAction;
pub use search_form::SearchFormAction;
pub use stories::{RequestId, StoriesAction};
pub use story_list::StoryListAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
///
/// Actions are categorized as:
/// - `Navigate` / `TextInput` / `ViewContext`: Generic actions that need translation by the active view
/// - `Global`: Application-wide actions (quit, view management)
/// - Domain variants: Already targeted to a specific reducer or middleware
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts that re-enter the middleware chain but never reach reducers.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),

    /// Search form input and focus
    SearchForm(SearchFormAction),
    /// Search term and request url
    Search(SearchAction),
    /// Fetched stories lifecycle
    Stories(StoriesAction),
    /// Story list cursor and per-item commands
    StoryList(StoryListAction),
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will only be observed by middleware.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
