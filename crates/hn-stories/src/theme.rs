use ratatui::{
    prelude::*,
    style::palette::tailwind,
};

/// Application theme - centralized color and style management
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_header: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Input colors
    pub input_bg: Color,
    pub input_focused_border: Color,
    pub input_border: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_normal: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,
            text_header: tailwind::ORANGE.c500,

            accent_primary: tailwind::ORANGE.c400,
            accent_secondary: tailwind::ORANGE.c600,

            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            input_bg: tailwind::SLATE.c900,
            input_focused_border: tailwind::ORANGE.c400,
            input_border: tailwind::SLATE.c600,

            selected_bg: tailwind::ORANGE.c700,
            selected_fg: Color::White,

            table_header_bg: tailwind::SLATE.c800,
            table_header_fg: tailwind::SLATE.c200,
            table_row_fg: tailwind::SLATE.c200,
            table_row_bg_normal: tailwind::SLATE.c950,
            table_row_bg_alt: tailwind::SLATE.c900,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds (help popup)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the page heading
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_header)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "d" in "d dismiss")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the search input border
    pub fn input_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.input_focused_border)
        } else {
            Style::default().fg(self.input_border)
        }
    }

    /// Style for the text inside the search input
    pub fn input_text(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.input_bg)
    }

    /// Style for a clickable control, dimmed when disabled
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::White)
                .bg(self.accent_secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.text_muted)
                .bg(self.bg_panel)
                .add_modifier(Modifier::DIM)
        }
    }

    /// Style for table headers
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected table rows
    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for table rows, alternating background
    pub fn table_row(&self, index: usize) -> Style {
        let bg = if index % 2 == 0 {
            self.table_row_bg_normal
        } else {
            self.table_row_bg_alt
        };
        Style::default().fg(self.table_row_fg).bg(bg)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for informational messages
    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }
}
