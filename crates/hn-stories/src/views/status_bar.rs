//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `key hint  key hint ...                               url`

use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, Frame};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a> {
    vm: &'a StatusBarViewModel,
    theme: &'a Theme,
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(self.theme.bg_panel).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        for hint in &self.vm.hints {
            let needed = (hint.keys.chars().count() + hint.description.len() + 3) as u16;
            if x + needed >= right {
                break;
            }
            let (nx, _) = buf.set_stringn(x, area.y, &hint.keys, usize::MAX, self.theme.key_hint());
            let (nx, _) = buf.set_stringn(
                nx + 1,
                area.y,
                hint.description,
                usize::MAX,
                self.theme.key_description(),
            );
            x = nx + 2;
        }

        // Url on the right, only when it fits
        let url_width = self.vm.url.chars().count() as u16;
        if x + url_width + 1 < right {
            buf.set_string(right - url_width - 1, area.y, &self.vm.url, self.theme.muted());
        }
    }
}

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = StatusBarViewModel::from_state(state);
    f.render_widget(
        StatusBarWidget {
            vm: &vm,
            theme: &state.theme,
        },
        area,
    );
}
