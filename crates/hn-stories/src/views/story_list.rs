//! Item / List widgets
//!
//! One table row per story, in data order. Each row shows
//! the title (opened with Enter/o), author, comment count, points and the
//! dismiss control.

use crate::theme::Theme;
use crate::view_models::{StoryListViewModel, StoryRowViewModel};
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

const DISMISS_LABEL: &str = "[d] Dismiss";

/// A single story row
pub struct StoryItem<'a> {
    vm: &'a StoryRowViewModel,
    index: usize,
    theme: &'a Theme,
}

impl<'a> StoryItem<'a> {
    pub fn new(vm: &'a StoryRowViewModel, index: usize, theme: &'a Theme) -> Self {
        Self { vm, index, theme }
    }

    pub fn into_row(self) -> Row<'a> {
        Row::new(vec![
            Cell::from(self.vm.title.as_str()),
            Cell::from(self.vm.author.as_str()),
            Cell::from(format!("{:>8}", self.vm.comments)),
            Cell::from(format!("{:>6}", self.vm.points)),
            Cell::from(DISMISS_LABEL).style(self.theme.muted()),
        ])
        .style(self.theme.table_row(self.index))
        .height(1)
    }
}

/// The list of all stories
pub struct StoryList<'a> {
    vm: StoryListViewModel,
    theme: &'a Theme,
}

impl<'a> StoryList<'a> {
    pub fn new(vm: StoryListViewModel, theme: &'a Theme) -> Self {
        Self { vm, theme }
    }

    pub fn render(&self, area: Rect, f: &mut Frame) {
        let header_style = self.theme.table_header();
        let header = Row::new(
            ["Title", "Author", "Comments", "Points", ""]
                .into_iter()
                .map(|h| Cell::from(h).style(header_style)),
        )
        .style(header_style)
        .height(1);

        let rows: Vec<Row> = self
            .vm
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| StoryItem::new(row, index, self.theme).into_row())
            .collect();

        let widths = [
            Constraint::Percentage(50),
            Constraint::Percentage(16),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(DISMISS_LABEL.len() as u16),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(self.theme.table_selected())
            .highlight_symbol("> ");

        let mut table_state = TableState::default();
        if !self.vm.is_empty() {
            table_state.select(Some(self.vm.selected_index));
        }

        f.render_stateful_widget(table, area, &mut table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_helpers::buffer_lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn row(title: &str) -> StoryRowViewModel {
        StoryRowViewModel {
            title: title.into(),
            author: "pg".into(),
            comments: "3".into(),
            points: "10".into(),
        }
    }

    fn draw(vm: StoryListViewModel) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 6)).unwrap();
        terminal
            .draw(|f| StoryList::new(vm, &theme).render(f.area(), f))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_one_row_per_story() {
        let lines = draw(StoryListViewModel {
            rows: vec![row("Alpha"), row("Beta")],
            selected_index: 1,
        });

        assert!(lines[0].contains("Title"));
        assert!(lines[1].contains("Alpha"));
        assert!(lines[1].contains(DISMISS_LABEL));
        assert!(lines[2].contains("Beta"));
        assert!(lines[2].starts_with("> "));
        assert!(lines[3].trim().is_empty());
    }

    #[test]
    fn test_empty_list_renders_only_header() {
        let lines = draw(StoryListViewModel {
            rows: vec![],
            selected_index: 0,
        });
        assert!(lines[0].contains("Title"));
        assert!(lines[1].trim().is_empty());
    }
}
