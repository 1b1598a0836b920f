//! Header bar widget
//!
//! Provides the main header with the app title, keybindings and load status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use cdex_core::LoadState;

use crate::theme::styles;

/// Title shown in the header
pub const APP_TITLE: &str = "Rick and Morty Characters";

/// Main header showing app title, keybindings and fetch status
pub struct MainHeader<'a> {
    load_state: &'a LoadState,
    show_back: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(load_state: &'a LoadState) -> Self {
        Self {
            load_state,
            show_back: false,
        }
    }

    /// Advertise Esc as "back" instead of "quit"
    pub fn with_back(mut self, show_back: bool) -> Self {
        self.show_back = show_back;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, icon_style) = styles::load_indicator(self.load_state);

        // Left: status dot + title
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Right: shortcuts + status label; shortcuts go first when space is short
        let esc_label = if self.show_back { "Back" } else { "Quit" };
        let label = Span::styled(self.load_state.label(), icon_style);
        let with_hints = Line::from(vec![
            Span::styled("[↑↓]", styles::text_secondary()),
            Span::styled(" Move  ", styles::text_muted()),
            Span::styled("[Enter]", styles::text_secondary()),
            Span::styled(" Open  ", styles::text_muted()),
            Span::styled("[Esc]", styles::text_secondary()),
            Span::styled(format!(" {}  ", esc_label), styles::text_muted()),
            label.clone(),
            Span::raw(" "),
        ]);
        let status_only = Line::from(vec![label, Span::raw(" ")]);

        let available = inner.width.saturating_sub(title_width + 1);
        let status = [with_hints, status_only]
            .into_iter()
            .find(|line| line.width() as u16 <= available);

        if let Some(status) = status {
            let status_width = status.width() as u16;
            let x = inner.x + inner.width - status_width;
            buf.set_line(x, inner.y, &status, status_width);
        }
    }
}
