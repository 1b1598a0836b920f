//! Character detail panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use cdex_core::{Character, DetailView, DEFAULT_TYPE_FALLBACK};

use crate::theme::styles;

/// Shown for every unresolved lookup unless distinct messages are enabled
pub const UNRESOLVED_PLACEHOLDER: &str = "Loading...";

pub struct CharacterDetail<'a> {
    view: &'a DetailView<'a>,
    type_fallback: &'a str,
    distinguish_unresolved: bool,
}

impl<'a> CharacterDetail<'a> {
    pub fn new(view: &'a DetailView<'a>) -> Self {
        Self {
            view,
            type_fallback: DEFAULT_TYPE_FALLBACK,
            distinguish_unresolved: false,
        }
    }

    pub fn type_fallback(mut self, fallback: &'a str) -> Self {
        self.type_fallback = fallback;
        self
    }

    /// Render "not found" and "invalid id" instead of the loading placeholder
    pub fn distinguish_unresolved(mut self, distinguish: bool) -> Self {
        self.distinguish_unresolved = distinguish;
        self
    }

    fn character_lines(&self, character: &'a Character) -> Vec<Line<'a>> {
        let field = |label: &'static str, value: &'a str| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), styles::text_secondary()),
                Span::styled(value, styles::text_primary()),
            ])
        };

        vec![
            Line::from(Span::styled(character.name.as_str(), styles::accent_bold())),
            Line::default(),
            field("Status", character.status.as_str()),
            field("Species", character.species.as_str()),
            field("Type", character.kind_or(self.type_fallback)),
            field("Gender", character.gender.as_str()),
        ]
    }

    fn placeholder(&self) -> String {
        if !self.distinguish_unresolved {
            return UNRESOLVED_PLACEHOLDER.to_string();
        }
        match self.view {
            DetailView::NotFound { id } => format!("Character not found (#{})", id),
            DetailView::InvalidId { segment } => format!("Invalid character id '{}'", segment),
            _ => UNRESOLVED_PLACEHOLDER.to_string(),
        }
    }
}

impl Widget for CharacterDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Details ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.view.character() {
            Some(character) => self.character_lines(character),
            None => vec![Line::from(Span::styled(
                self.placeholder(),
                styles::text_muted(),
            ))],
        };

        let content = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(1),
            ..inner
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(content, buf);
    }
}
