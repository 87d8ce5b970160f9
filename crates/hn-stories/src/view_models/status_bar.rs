//! Status bar view model

use crate::command_id::CommandId;
use crate::state::AppState;

/// One "key description" pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarViewModel {
    pub hints: Vec<KeyHint>,
    /// Url of the committed search
    pub url: String,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let commands: &[(CommandId, &'static str)] = if state.search_form.input_focused() {
            &[
                (CommandId::SearchToggleFocus, "list"),
                (CommandId::GlobalClose, "quit"),
            ]
        } else {
            &[
                (CommandId::SearchFocus, "search"),
                (CommandId::NavigateNext, "down"),
                (CommandId::NavigatePrevious, "up"),
                (CommandId::StoryOpen, "open"),
                (CommandId::StoryDismiss, "dismiss"),
                (CommandId::KeyBindingsToggleView, "help"),
                (CommandId::GlobalClose, "quit"),
            ]
        };

        let mut hints: Vec<KeyHint> = commands
            .iter()
            .filter_map(|&(command, description)| {
                state
                    .keymap
                    .compact_hint_for_command(command)
                    .map(|keys| KeyHint { keys, description })
            })
            .collect();

        if state.search_form.input_focused() {
            // Enter and Esc are routed by capability, not by the keymap
            hints.insert(
                0,
                KeyHint {
                    keys: "Enter".into(),
                    description: "submit",
                },
            );
            hints.insert(
                1,
                KeyHint {
                    keys: "Esc".into(),
                    description: "leave input",
                },
            );
            hints.retain(|hint| hint.description != "quit");
        }

        Self {
            hints,
            url: state.search.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use hn_stories_config::AppConfig;

    #[test]
    fn test_list_hints_use_keymap() {
        let state = AppState::new("React", &AppConfig::default());
        let vm = StatusBarViewModel::from_state(&state);

        assert_eq!(vm.hints[0].keys, "/");
        assert!(vm
            .hints
            .iter()
            .any(|h| h.keys == "d/Del" && h.description == "dismiss"));
        assert_eq!(vm.url, "https://hn.algolia.com/api/v1/search?query=React");
    }

    #[test]
    fn test_input_hints() {
        let mut state = AppState::new("React", &AppConfig::default());
        state.search_form.focus = Focus::SearchInput;
        let vm = StatusBarViewModel::from_state(&state);

        let descriptions: Vec<&str> = vm.hints.iter().map(|h| h.description).collect();
        assert_eq!(descriptions, vec!["submit", "leave input", "list"]);
    }
}
