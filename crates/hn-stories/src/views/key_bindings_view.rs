//! Key Bindings Help Panel View
//!
//! Displays all available keybindings grouped by category.

use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::KeyBindingsPanelViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Left padding for content
const LEFT_PADDING: &str = "  ";

/// Key bindings help panel view
#[derive(Debug, Clone)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyBindingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// Render the key bindings panel
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = KeyBindingsPanelViewModel::from_state(state);

    // 60% width, tall enough for every section, centered
    let panel_width = (area.width * 60 / 100).max(40).min(area.width);
    let panel_height = (vm.total_lines() as u16 + 2).min(area.height);
    let panel_area = Rect {
        x: area.x + (area.width - panel_width) / 2,
        y: area.y + (area.height - panel_height) / 2,
        width: panel_width,
        height: panel_height,
    };

    f.render_widget(Clear, panel_area);

    let footer_hint = Line::from(vec![
        Span::styled(format!(" {}", vm.close_hint), theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint);

    let paragraph = Paragraph::new(build_content_lines(&vm, theme))
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, panel_area);
}

/// Build all content lines for the panel
fn build_content_lines<'a>(vm: &KeyBindingsPanelViewModel, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for section in &vm.sections {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(section.category.clone(), theme.section_header()),
        ]));

        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled("─".repeat(section.category.len()), theme.muted()),
        ]));

        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<12}", binding.keys), theme.key_hint()),
                Span::styled(binding.description.clone(), theme.key_description()),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}
