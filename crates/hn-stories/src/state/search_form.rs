//! Search form state

/// Which part of the screen receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    StoryList,
    SearchInput,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::StoryList => Self::SearchInput,
            Self::SearchInput => Self::StoryList,
        }
    }
}

/// State of the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormState {
    /// Identifier of the input element
    pub input_id: &'static str,
    pub label: &'static str,
    /// The input asks for focus once, after the first render
    pub auto_focus: bool,
    pub focus: Focus,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self {
            input_id: "search",
            label: "Search:",
            auto_focus: true,
            focus: Focus::default(),
        }
    }
}

impl SearchFormState {
    pub fn input_focused(&self) -> bool {
        self.focus == Focus::SearchInput
    }
}
