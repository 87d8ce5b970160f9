//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//! These are handled directly before any other processing.
//!
//! ## Layer 2: Capabilities
//! Route keys based on view capabilities. While the search input has focus the
//! stories view reports TEXT_INPUT, so printable keys are typed into the input
//! rather than looked up in the keymap.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, drop commands the view's capabilities do not
//! cover (list commands need ITEM_NAVIGATION, letter navigation also needs
//! VIM_NAVIGATION_BINDINGS), then check if the active view accepts the action.
//! This prevents actions from "leaking" to reducers when a different view is active.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::keybindings::{KeyMatch, PendingKey};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
///
/// # Layers
/// 1. **Priority keys**: Ctrl+C (quit), Esc (leave input / close) - always work
/// 2. **Capabilities**: TEXT_INPUT routes chars to text input and swallows
///    other editing keys
/// 3. **Keymap + Gating**: Look up in keymap, check capabilities, check view accepts action
pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        // Esc leaves the text input if there is one, otherwise closes the view
        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            // Clear any pending sequence when in text input mode
            self.pending_key = None;

            if let KeyCode::Char(c) = key.code {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }

                // Ctrl+U - Unix line kill (clear line)
                if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
            }

            if key.code == KeyCode::Backspace {
                if key.modifiers.contains(KeyModifiers::SUPER) {
                    // Cmd+Backspace on Mac - clear entire line
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                } else {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                }
                return false;
            }

            // Enter in text input mode submits
            if key.code == KeyCode::Enter {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                return false;
            }

            // Tab and Ctrl+ combinations go through Layer 3; every other key
            // belongs to the input and must not reach list commands
            let passes_through = matches!(key.code, KeyCode::Tab | KeyCode::BackTab)
                || key.modifiers.contains(KeyModifiers::CONTROL);
            if !passes_through {
                log::debug!("Layer 2: TEXT_INPUT - swallowing {:?}", key.code);
                return false;
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        let command_ids = match state.keymap.match_key(&key, self.pending_key.as_ref()) {
            KeyMatch::Pending(first) => {
                log::debug!("Layer 3: Waiting for second key in sequence (first: {})", first);
                self.pending_key = Some(PendingKey::new(first));
                return false;
            }
            KeyMatch::Commands(command_ids) => command_ids,
            KeyMatch::Unbound => Vec::new(),
        };
        self.pending_key = None;

        // Try each matched command until the active view accepts one
        for cmd_id in command_ids {
            if !capabilities_allow(cmd_id, &key, capabilities) {
                log::debug!(
                    "Layer 3: Command {:?} not supported by view capabilities {:?}",
                    cmd_id,
                    capabilities
                );
                continue;
            }

            let action = cmd_id.to_action();

            if let Some(view) = view {
                if view.accepts_action(&action) {
                    log::debug!(
                        "Layer 3: Command {:?} accepted by view, dispatching",
                        cmd_id
                    );
                    dispatcher.dispatch(action);
                    return false;
                } else {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
            } else {
                dispatcher.dispatch(action);
                return false;
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

/// Whether the active view's capabilities permit `cmd_id` for this key
///
/// List commands need ITEM_NAVIGATION. Navigating with a plain letter (j, k,
/// gg, G) additionally needs VIM_NAVIGATION_BINDINGS; arrows and Home/End do not.
fn capabilities_allow(cmd_id: CommandId, key: &KeyEvent, capabilities: PanelCapabilities) -> bool {
    if !capabilities.contains(cmd_id.required_capabilities()) {
        return false;
    }

    let is_navigation = matches!(
        cmd_id,
        CommandId::NavigateNext
            | CommandId::NavigatePrevious
            | CommandId::NavigateToTop
            | CommandId::NavigateToBottom
    );
    if is_navigation && matches!(key.code, KeyCode::Char(_)) {
        return capabilities.supports_vim_navigation();
    }

    true
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, NavigationAction, SearchFormAction};
    use crate::views::KeyBindingsView;
    use hn_stories_config::AppConfig;
    use std::sync::mpsc::{self, Receiver};

    fn setup() -> (KeyboardMiddleware, AppState, Dispatcher, Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (
            KeyboardMiddleware::new(),
            AppState::new("React", &AppConfig::default()),
            Dispatcher::new(tx),
            rx,
        )
    }

    fn press(
        mw: &mut KeyboardMiddleware,
        state: &AppState,
        dispatcher: &Dispatcher,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> bool {
        let key = KeyEvent::new(code, modifiers);
        mw.handle(&Action::Global(GlobalAction::KeyPressed(key)), state, dispatcher)
    }

    #[test]
    fn test_ctrl_c_quits_even_in_text_input() {
        let (mut mw, mut state, dispatcher, rx) = setup();
        state.search_form.focus = crate::state::Focus::SearchInput;

        assert!(!press(&mut mw, &state, &dispatcher, KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_chars_go_to_text_input_when_focused() {
        let (mut mw, mut state, dispatcher, rx) = setup();
        state.search_form.focus = crate::state::Focus::SearchInput;

        press(&mut mw, &state, &dispatcher, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Char('j')))
        ));

        press(&mut mw, &state, &dispatcher, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::TextInput(TextInputAction::Escape))
        ));
    }

    #[test]
    fn test_chars_use_keymap_when_list_focused() {
        let (mut mw, state, dispatcher, rx) = setup();

        press(&mut mw, &state, &dispatcher, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Navigate(NavigationAction::Next))
        ));

        press(&mut mw, &state, &dispatcher, KeyCode::Char('d'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::ViewContext(ContextAction::Dismiss))
        ));
    }

    #[test]
    fn test_gg_sequence_navigates_to_top() {
        let (mut mw, state, dispatcher, rx) = setup();

        press(&mut mw, &state, &dispatcher, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());

        press(&mut mw, &state, &dispatcher, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Navigate(NavigationAction::ToTop))
        ));
    }

    #[test]
    fn test_tab_toggles_focus_from_text_input() {
        let (mut mw, mut state, dispatcher, rx) = setup();
        state.search_form.focus = crate::state::Focus::SearchInput;

        press(&mut mw, &state, &dispatcher, KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::SearchForm(SearchFormAction::ToggleFocus))
        ));
    }

    #[test]
    fn test_help_view_gates_story_commands() {
        let (mut mw, mut state, dispatcher, rx) = setup();
        state.view_stack.push(Box::new(KeyBindingsView::new()));

        press(&mut mw, &state, &dispatcher, KeyCode::Char('d'), KeyModifiers::NONE);
        assert!(rx.try_recv().is_err());

        press(&mut mw, &state, &dispatcher, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Close))));
    }

    #[test]
    fn test_editing_keys_in_text_input_do_not_reach_the_list() {
        let (mut mw, mut state, dispatcher, rx) = setup();
        state.search_form.focus = crate::state::Focus::SearchInput;

        for code in [
            KeyCode::Delete,
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
        ] {
            assert!(!press(&mut mw, &state, &dispatcher, code, KeyModifiers::NONE));
            assert!(rx.try_recv().is_err(), "{:?} leaked out of the input", code);
        }
    }

    #[test]
    fn test_ctrl_q_still_quits_from_text_input() {
        let (mut mw, mut state, dispatcher, rx) = setup();
        state.search_form.focus = crate::state::Focus::SearchInput;

        press(&mut mw, &state, &dispatcher, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(matches!(rx.try_recv(), Ok(Action::Global(GlobalAction::Quit))));
    }

    #[test]
    fn test_list_commands_need_item_navigation() {
        let delete = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert!(!capabilities_allow(
            CommandId::StoryDismiss,
            &delete,
            PanelCapabilities::TEXT_INPUT
        ));
        assert!(capabilities_allow(
            CommandId::StoryDismiss,
            &delete,
            PanelCapabilities::ITEM_NAVIGATION
        ));
        assert!(capabilities_allow(
            CommandId::GlobalQuit,
            &delete,
            PanelCapabilities::empty()
        ));
    }

    #[test]
    fn test_letter_navigation_needs_vim_bindings() {
        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);

        assert!(!capabilities_allow(
            CommandId::NavigateNext,
            &j,
            PanelCapabilities::ITEM_NAVIGATION
        ));
        assert!(capabilities_allow(
            CommandId::NavigateNext,
            &down,
            PanelCapabilities::ITEM_NAVIGATION
        ));
        assert!(capabilities_allow(
            CommandId::NavigateNext,
            &j,
            PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS
        ));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (mut mw, state, dispatcher, rx) = setup();
        assert!(mw.handle(&Action::Global(GlobalAction::Quit), &state, &dispatcher));
        assert!(rx.try_recv().is_err());
    }
}
