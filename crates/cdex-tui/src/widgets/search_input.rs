//! Search input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cdex_core::SearchQuery;

use crate::theme::styles;

/// Placeholder shown while the query is empty
pub const SEARCH_PLACEHOLDER: &str = "Search by name";

/// Always-visible search box; displays the query, never edits it
pub struct SearchInput<'a> {
    query: &'a SearchQuery,
    /// Number of characters the query currently matches
    matches: Option<usize>,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a SearchQuery) -> Self {
        Self {
            query,
            matches: None,
        }
    }

    pub fn with_matches(mut self, matches: usize) -> Self {
        self.matches = Some(matches);
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(" / ", styles::accent_bold())];

        if self.query.is_empty() {
            spans.push(Span::styled("_", styles::accent_bold()));
            spans.push(Span::styled(SEARCH_PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(self.query.text(), styles::text_primary()));
            spans.push(Span::styled("_", styles::accent_bold()));

            if let Some(count) = self.matches {
                let noun = if count == 1 { "match" } else { "matches" };
                spans.push(Span::styled(
                    format!("  [{} {}]", count, noun),
                    styles::text_secondary(),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
