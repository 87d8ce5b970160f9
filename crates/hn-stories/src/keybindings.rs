//! Story keymap
//!
//! Maps key presses to [`CommandId`]s. Bindings are written as short text
//! patterns so `default_keymap` reads like the help popup:
//!
//! | pattern        | meaning                                          |
//! |----------------|--------------------------------------------------|
//! | `j`, `G`, `?`  | a typed character (case matters)                 |
//! | `ctrl+q`       | Ctrl plus a character                            |
//! | `delete`       | a named key: arrows, home/end, enter, tab, ...   |
//! | `g g`          | two characters typed within [`SEQUENCE_TIMEOUT`] |
//!
//! A key may be bound to several commands. The keyboard middleware offers
//! them to the active view in keymap order.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a sequence waits for the second
pub const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A key pattern bound to a command, plus the hint shown for it
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: String,
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Char(char),
    Ctrl(char),
    Named(KeyCode),
    Sequence(char, char),
}

impl KeyPattern {
    pub fn parse(pattern: &str) -> Option<Self> {
        let mut parts = pattern.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => {
                Some(Self::Sequence(single_char(first)?, single_char(second)?))
            }
            (Some(key), None, None) => Self::parse_key(key),
            _ => None,
        }
    }

    fn parse_key(key: &str) -> Option<Self> {
        if let Some(c) = single_char(key) {
            return Some(Self::Char(c));
        }

        let key = key.to_ascii_lowercase();
        if let Some(rest) = key.strip_prefix("ctrl+") {
            return single_char(rest).map(Self::Ctrl);
        }

        named_key(&key).map(Self::Named)
    }

    /// Whether a single key press matches; sequences never match one press
    fn matches(&self, key: &KeyEvent) -> bool {
        match *self {
            Self::Char(c) => typed_char(key) == Some(c),
            Self::Ctrl(c) => {
                key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
            }
            Self::Named(code) => {
                key.code == code
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            }
            Self::Sequence(..) => false,
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        _ => return None,
    };
    Some(code)
}

/// The character a key press types, if it types one
///
/// Shift is part of the character itself (`G`, `?`), so only Ctrl and Alt
/// disqualify a press.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}

/// First half of a sequence, waiting for the second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub since: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            since: Instant::now(),
        }
    }

    fn is_fresh(&self) -> bool {
        self.since.elapsed() < SEQUENCE_TIMEOUT
    }
}

/// Outcome of looking up one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// Commands bound to the press, in keymap order
    Commands(Vec<CommandId>),
    /// The press starts a sequence
    Pending(char),
    Unbound,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Build a keymap, skipping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match KeyPattern::parse(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring key binding with invalid pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings }
    }

    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let typed = typed_char(key);

        if let (Some(pending), Some(second)) = (pending.filter(|p| p.is_fresh()), typed) {
            let completed = self.commands_where(|p| *p == KeyPattern::Sequence(pending.key, second));
            if !completed.is_empty() {
                return KeyMatch::Commands(completed);
            }
        }

        let commands = self.commands_where(|p| p.matches(key));
        if !commands.is_empty() {
            return KeyMatch::Commands(commands);
        }

        match typed {
            Some(c)
                if self
                    .bindings
                    .iter()
                    .any(|(_, p)| matches!(p, KeyPattern::Sequence(first, _) if *first == c)) =>
            {
                KeyMatch::Pending(c)
            }
            _ => KeyMatch::Unbound,
        }
    }

    fn commands_where(&self, predicate: impl Fn(&KeyPattern) -> bool) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| predicate(pattern))
            .map(|(binding, _)| binding.command)
            .collect()
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// All distinct hints for `command` joined with "/", e.g. "j/↓"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }

        (!hints.is_empty()).then(|| hints.join("/"))
    }
}

pub fn default_keymap() -> Keymap {
    use CommandId::*;

    Keymap::new(vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        // Stories
        KeyBinding::new("enter", "Enter", StoryOpen),
        KeyBinding::new("o", "o", StoryOpen),
        KeyBinding::new("d", "d", StoryDismiss),
        KeyBinding::new("delete", "Del", StoryDismiss),
        // Search
        KeyBinding::new("/", "/", SearchFocus),
        KeyBinding::new("tab", "Tab", SearchToggleFocus),
        // Help
        KeyBinding::new("?", "?", KeyBindingsToggleView),
        // Global
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("ctrl+q", "Ctrl+Q", GlobalQuit),
    ])
}
