//! Stories View
//!
//! The base screen: heading, search form, separator, the fetch status and the
//! story list, with a status bar at the bottom.

use crate::actions::{
    Action, ContextAction, NavigationAction, SearchFormAction, StoryListAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{SearchFormViewModel, StoryListViewModel};
use crate::views::search_form::SearchForm;
use crate::views::story_list::StoryList;
use crate::views::{status_bar, View, ViewId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEADING: &str = "My Hacker Stories";
pub const ERROR_MESSAGE: &str = "Something went wrong ...";
pub const LOADING_MESSAGE: &str = "Loading ...";

#[derive(Debug, Clone)]
pub struct StoriesView;

impl StoriesView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StoriesView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for StoriesView {
    fn view_id(&self) -> ViewId {
        ViewId::Stories
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if state.search_form.input_focused() {
            PanelCapabilities::TEXT_INPUT
        } else {
            PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => StoryListAction::NavigateNext,
            NavigationAction::Previous => StoryListAction::NavigatePrevious,
            NavigationAction::ToTop => StoryListAction::NavigateToTop,
            NavigationAction::ToBottom => StoryListAction::NavigateToBottom,
        };
        Some(Action::StoryList(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SearchFormAction::Char(c),
            TextInputAction::Backspace => SearchFormAction::Backspace,
            TextInputAction::ClearLine => SearchFormAction::ClearLine,
            TextInputAction::Escape => SearchFormAction::Blur,
            TextInputAction::Confirm => SearchFormAction::Submit,
        };
        Some(Action::SearchForm(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        let action = match action {
            ContextAction::Confirm => StoryListAction::OpenSelected,
            ContextAction::Dismiss => StoryListAction::DismissSelected,
        };
        Some(Action::StoryList(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::StoryList(_)
                | Action::SearchForm(_)
                | Action::ViewContext(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    f.render_widget(Block::default().style(theme.text().bg(theme.bg_primary)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(3), // search form
            Constraint::Length(1), // separator
            Constraint::Min(0),    // status + list
            Constraint::Length(1), // status bar
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::styled(format!(" {}", HEADING), theme.heading())),
        chunks[0],
    );

    SearchForm::new(SearchFormViewModel::from_state(state), theme).render(chunks[1], f);

    f.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.muted()),
        chunks[2],
    );

    render_body(state, chunks[3], f);

    status_bar::render(state, chunks[4], f);
}

/// Error message, then either the loading placeholder or the list
fn render_body(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let stories = &state.stories;

    let mut area = area;
    if stories.is_error {
        let [error_area, rest] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        f.render_widget(
            Paragraph::new(Line::styled(format!(" {}", ERROR_MESSAGE), theme.error())),
            error_area,
        );
        area = rest;
    }

    if stories.is_loading {
        f.render_widget(
            Paragraph::new(Line::styled(format!(" {}", LOADING_MESSAGE), theme.info())),
            area,
        );
    } else {
        StoryList::new(StoryListViewModel::from_state(state), theme).render(area, f);
    }
}
