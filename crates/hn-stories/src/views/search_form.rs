//! Search form widgets
//!
//! `LabeledInput` is a label plus a bordered single-line text field.
//! `SearchForm` puts the input next to a submit control that is rendered
//! dimmed while there is nothing to submit.

use crate::theme::Theme;
use crate::view_models::SearchFormViewModel;
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label plus bordered single-line text field
#[derive(Debug)]
pub struct LabeledInput<'a> {
    pub id: &'static str,
    pub label: &'a str,
    pub value: &'a str,
    pub is_focused: bool,
    theme: &'a Theme,
}

impl<'a> LabeledInput<'a> {
    pub fn new(
        id: &'static str,
        label: &'a str,
        value: &'a str,
        is_focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            id,
            label,
            value,
            is_focused,
            theme,
        }
    }

    pub fn render(&self, area: Rect, f: &mut Frame) {
        let label_width = self.label.chars().count() as u16 + 2;
        let [label_area, input_area] =
            Layout::horizontal([Constraint::Length(label_width), Constraint::Min(3)]).areas(area);

        // Label sits on the text row of the bordered input
        let label_row = Rect {
            y: label_area.y + label_area.height.min(3) / 2,
            height: 1.min(label_area.height),
            ..label_area
        };
        f.render_widget(
            Paragraph::new(Line::styled(format!(" {}", self.label), self.theme.text())),
            label_row,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.input_border(self.is_focused));
        let inner = block.inner(input_area);

        // Keep the end of a long value visible
        let value_width = self.value.chars().count() as u16;
        let scroll = value_width.saturating_sub(inner.width.saturating_sub(1));

        f.render_widget(
            Paragraph::new(self.value)
                .style(self.theme.input_text())
                .scroll((0, scroll))
                .block(block),
            input_area,
        );

        if self.is_focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position(Position::new(
                inner.x + (value_width - scroll).min(inner.width - 1),
                inner.y,
            ));
        }
    }
}

/// Labeled input bound to the search term, plus the submit control
#[derive(Debug)]
pub struct SearchForm<'a> {
    vm: SearchFormViewModel,
    theme: &'a Theme,
}

impl<'a> SearchForm<'a> {
    pub fn new(vm: SearchFormViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }

    pub fn render(&self, area: Rect, f: &mut Frame) {
        let submit_width = self.vm.submit_label.chars().count() as u16 + 2;
        let [input_area, submit_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(submit_width)]).areas(area);

        LabeledInput::new(
            self.vm.input_id,
            &self.vm.label,
            &self.vm.value,
            self.vm.is_focused,
            self.theme,
        )
        .render(input_area, f);

        let submit_row = Rect {
            y: submit_area.y + submit_area.height.min(3) / 2,
            height: 1.min(submit_area.height),
            ..submit_area
        };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.vm.submit_label.as_str(), self.theme.button(self.vm.submit_enabled)),
            ])),
            submit_row,
        );
    }
}
