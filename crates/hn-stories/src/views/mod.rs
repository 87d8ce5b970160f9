use crate::actions::{
    Action, ContextAction, Event, NavigationAction, SearchFormAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod key_bindings_view;
pub mod search_form;
pub mod status_bar;
pub mod stories_view;
pub mod story_list;

pub use key_bindings_view::KeyBindingsView;
pub use stories_view::StoriesView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Stories,
    KeyBindings,
}

/// View trait - defines the interface that all views must implement
///
/// This allows the application to interact with views polymorphically through
/// trait objects (Box<dyn View>).
///
/// IMPORTANT: This trait must be object-safe to be used as a trait object.
/// That means:
/// - No generic methods
/// - No Self: Sized bounds
/// - All methods must use &self (not consume self)
/// - Must be Send, because actions carrying views cross the dispatcher channel
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle navigation.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    ///
    /// The default implementation returns None, indicating the view doesn't
    /// handle text input.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, d) into what it means for the item in focus
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Whether a keymap command may be dispatched while this view is active
    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_))
    }
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are rendered bottom-up, so floating views on top render last.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}

/// Actions to run once, right after the first frame has been drawn
///
/// The search input asks for focus if it was built with `auto_focus`; the
/// `Mounted` event starts the initial fetch. Neither is repeated on later
/// renders.
pub fn mount_effects(state: &AppState) -> Vec<Action> {
    let mut effects = Vec::new();
    if state.search_form.auto_focus {
        effects.push(Action::SearchForm(SearchFormAction::Focus));
    }
    effects.push(Action::event(Event::Mounted));
    effects
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use ratatui::buffer::Buffer;

    /// Flatten a rendered buffer into one string per row
    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        buffer_lines(buffer).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_stories_config::AppConfig;

    #[test]
    fn test_mount_effects_focus_then_fetch() {
        let state = AppState::new("React", &AppConfig::default());
        let effects = mount_effects(&state);

        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Action::SearchForm(SearchFormAction::Focus)));
        assert!(matches!(effects[1], Action::Event(Event::Mounted)));
    }

    #[test]
    fn test_mount_effects_without_auto_focus() {
        let mut state = AppState::new("React", &AppConfig::default());
        state.search_form.auto_focus = false;

        let effects = mount_effects(&state);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Action::Event(Event::Mounted)));
    }
}
