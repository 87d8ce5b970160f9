pub mod key_bindings_view_model;
pub mod search_form_view_model;
pub mod status_bar;
pub mod story_list_view_model;

pub use key_bindings_view_model::KeyBindingsPanelViewModel;
pub use search_form_view_model::SearchFormViewModel;
pub use status_bar::StatusBarViewModel;
pub use story_list_view_model::{StoryListViewModel, StoryRowViewModel};
