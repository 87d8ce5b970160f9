//! Command identifiers
//!
//! This module defines all command IDs as an enum for type-safe,
//! memory-efficient command references that can be serialized/deserialized.

use serde::{Deserialize, Serialize};

use crate::capabilities::PanelCapabilities;

/// Unique identifier for each command in the application.
///
/// Commands are the semantic actions users can trigger. Each command
/// has a unique ID that can be referenced in keybindings and the help view.
///
/// The enum is serialized as snake_case (e.g., `StoryDismiss` -> `"story_dismiss"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    /// Navigate to the next item (down)
    NavigateNext,
    /// Navigate to the previous item (up)
    NavigatePrevious,
    /// Jump to the first item (gg in vim)
    NavigateToTop,
    /// Jump to the last item (G in vim)
    NavigateToBottom,

    // === Stories ===
    /// Open the selected story in the browser
    StoryOpen,
    /// Dismiss the selected story
    StoryDismiss,

    // === Search ===
    /// Move focus into the search input
    SearchFocus,
    /// Switch focus between search input and story list
    SearchToggleFocus,

    // === Help ===
    /// Toggle the key bindings help view
    KeyBindingsToggleView,

    // === Global ===
    /// Close the current view
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command into the action it dispatches
    pub fn to_action(self) -> crate::actions::Action {
        use crate::actions::{
            Action, ContextAction, GlobalAction, NavigationAction, SearchFormAction,
        };
        use crate::views::KeyBindingsView;

        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::StoryOpen => Action::ViewContext(ContextAction::Confirm),
            Self::StoryDismiss => Action::ViewContext(ContextAction::Dismiss),

            Self::SearchFocus => Action::SearchForm(SearchFormAction::Focus),
            Self::SearchToggleFocus => Action::SearchForm(SearchFormAction::ToggleFocus),

            Self::KeyBindingsToggleView => {
                Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())))
            }

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Human readable title, shown in the help view
    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Navigate down",
            Self::NavigatePrevious => "Navigate up",
            Self::NavigateToTop => "Go to first story",
            Self::NavigateToBottom => "Go to last story",
            Self::StoryOpen => "Open story in browser",
            Self::StoryDismiss => "Dismiss story",
            Self::SearchFocus => "Focus search",
            Self::SearchToggleFocus => "Toggle search focus",
            Self::KeyBindingsToggleView => "Show key bindings",
            Self::GlobalClose => "Close",
            Self::GlobalQuit => "Quit",
        }
    }

    /// Capabilities the active view must report for this command to fire
    pub fn required_capabilities(&self) -> PanelCapabilities {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom
            | Self::StoryOpen
            | Self::StoryDismiss => PanelCapabilities::ITEM_NAVIGATION,
            _ => PanelCapabilities::empty(),
        }
    }

    /// Category used to group commands in the help view
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom => "Navigation",
            Self::StoryOpen | Self::StoryDismiss => "Stories",
            Self::SearchFocus | Self::SearchToggleFocus => "Search",
            Self::KeyBindingsToggleView | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ContextAction};

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&CommandId::StoryDismiss).unwrap();
        assert_eq!(json, "\"story_dismiss\"");
    }

    #[test]
    fn test_story_commands_are_context_actions() {
        assert!(matches!(
            CommandId::StoryDismiss.to_action(),
            Action::ViewContext(ContextAction::Dismiss)
        ));
        assert!(matches!(
            CommandId::StoryOpen.to_action(),
            Action::ViewContext(ContextAction::Confirm)
        ));
    }

    #[test]
    fn test_list_commands_require_item_navigation() {
        assert_eq!(
            CommandId::StoryDismiss.required_capabilities(),
            PanelCapabilities::ITEM_NAVIGATION
        );
        assert_eq!(
            CommandId::NavigateToBottom.required_capabilities(),
            PanelCapabilities::ITEM_NAVIGATION
        );
        assert!(CommandId::SearchToggleFocus.required_capabilities().is_empty());
        assert!(CommandId::GlobalQuit.required_capabilities().is_empty());
    }
}
