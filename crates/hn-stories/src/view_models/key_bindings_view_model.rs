//! Key Bindings Panel View Model
//!
//! Pre-computes presentation data for the key bindings help panel.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;

/// A single binding row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Key hint (e.g., "j/↓", "gg/Home")
    pub keys: String,
    /// Description of what the binding does
    pub description: String,
}

/// A section grouping related bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSection {
    /// Category name (e.g., "Navigation", "Stories")
    pub category: String,
    pub bindings: Vec<BindingRow>,
}

/// View model for the key bindings help panel
#[derive(Debug, Clone)]
pub struct KeyBindingsPanelViewModel {
    pub title: String,
    /// Sections in the order their first binding appears in the keymap
    pub sections: Vec<BindingSection>,
    /// Close hint (e.g., "?/Esc")
    pub close_hint: String,
}

impl KeyBindingsPanelViewModel {
    /// Create a view model from app state
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;

        Self {
            title: " Keyboard Bindings ".to_string(),
            sections: Self::build_sections(keymap),
            close_hint: keymap
                .compact_hint_for_command(CommandId::KeyBindingsToggleView)
                .map(|h| format!("{}/Esc", h))
                .unwrap_or_else(|| "?/Esc".to_string()),
        }
    }

    /// One row per command, all of its hints joined
    fn build_sections(keymap: &Keymap) -> Vec<BindingSection> {
        let mut sections: Vec<BindingSection> = Vec::new();
        let mut seen: Vec<CommandId> = Vec::new();

        for binding in keymap.bindings() {
            if seen.contains(&binding.command) {
                continue;
            }
            seen.push(binding.command);

            let row = BindingRow {
                keys: keymap
                    .compact_hint_for_command(binding.command)
                    .unwrap_or_else(|| binding.hint.clone()),
                description: binding.command.title().to_string(),
            };

            let category = binding.command.category();
            match sections.iter_mut().find(|s| s.category == category) {
                Some(section) => section.bindings.push(row),
                None => sections.push(BindingSection {
                    category: category.to_string(),
                    bindings: vec![row],
                }),
            }
        }

        sections
    }

    /// Lines needed to render every section
    pub fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|s| 2 + s.bindings.len() + 1)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hn_stories_config::AppConfig;

    #[test]
    fn test_sections_group_by_category() {
        let state = AppState::new("React", &AppConfig::default());
        let vm = KeyBindingsPanelViewModel::from_state(&state);

        let categories: Vec<&str> = vm.sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["Navigation", "Stories", "Search", "General"]);

        let navigation = &vm.sections[0];
        assert_eq!(navigation.bindings.len(), 4);
        assert_eq!(navigation.bindings[0].keys, "j/↓");
        assert_eq!(navigation.bindings[2].keys, "gg/Home");
        assert_eq!(vm.close_hint, "?/Esc");
    }
}
