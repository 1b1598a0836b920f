//! Character list widget
//!
//! Renders the filtered list with a highlighted cursor row and keeps the
//! cursor in view by scrolling. Reports its visible height back into
//! [`ListViewState`] so paging moves by one screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use cdex_app::list_view_state::ListViewState;
use cdex_core::Character;

use crate::theme::styles;

pub struct CharacterList<'a> {
    characters: &'a [&'a Character],
    focused: bool,
}

impl<'a> CharacterList<'a> {
    pub fn new(characters: &'a [&'a Character]) -> Self {
        Self {
            characters,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// First row to draw so that `selected` stays visible
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}

impl StatefulWidget for CharacterList<'_> {
    type State = ListViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListViewState) {
        let title = format!(" Characters ({}) ", self.characters.len());
        let block = styles::glass_block(self.focused)
            .title(Span::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;
        state.visible_lines = visible;

        let offset = scroll_offset(state.selected, visible);

        for (row, (index, character)) in self
            .characters
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let is_selected = index == state.selected;

            let (name_style, id_style) = if is_selected {
                (styles::focused_selected(), styles::focused_selected())
            } else {
                (styles::text_primary(), styles::text_muted())
            };

            if is_selected {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), name_style);
            }

            let marker = if is_selected { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(character.name.as_str(), name_style),
                Span::styled(format!("  #{}", character.id), id_style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_character, TestTerminal};

    fn names(count: u32) -> Vec<Character> {
        (1..=count)
            .map(|id| test_character(id, &format!("Character {:02}", id)))
            .collect()
    }

    #[test]
    fn test_renders_all_names_in_order() {
        let characters = [
            test_character(1, "Rick Sanchez"),
            test_character(2, "Morty Smith"),
        ];
        let refs: Vec<&Character> = characters.iter().collect();
        let mut state = ListViewState::new();
        let mut term = TestTerminal::new();

        term.render_stateful_widget(CharacterList::new(&refs), term.area(), &mut state);

        assert!(term.line_contains(1, "Rick Sanchez"));
        assert!(term.line_contains(2, "Morty Smith"));
        assert!(term.buffer_contains("Characters (2)"));
    }

    #[test]
    fn test_selected_row_is_marked() {
        let characters = [
            test_character(1, "Rick Sanchez"),
            test_character(2, "Morty Smith"),
        ];
        let refs: Vec<&Character> = characters.iter().collect();
        let mut state = ListViewState::new();
        state.selected = 1;
        let mut term = TestTerminal::new();

        term.render_stateful_widget(CharacterList::new(&refs), term.area(), &mut state);

        assert!(term.line_contains(2, "▶ Morty Smith"));
        assert!(!term.line_contains(1, "▶"));
    }

    #[test]
    fn test_reports_visible_lines() {
        let refs: Vec<&Character> = Vec::new();
        let mut state = ListViewState::new();
        let mut term = TestTerminal::with_size(40, 12);

        term.render_stateful_widget(CharacterList::new(&refs), term.area(), &mut state);

        assert_eq!(state.visible_lines, 10); // 12 minus borders
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let characters = names(30);
        let refs: Vec<&Character> = characters.iter().collect();
        let mut state = ListViewState::new();
        state.selected = 25;
        let mut term = TestTerminal::with_size(40, 12);

        term.render_stateful_widget(CharacterList::new(&refs), term.area(), &mut state);

        assert!(term.buffer_contains("▶ Character 26"));
        assert!(!term.buffer_contains("Character 01"));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn test_empty_list_renders_frame_only() {
        let refs: Vec<&Character> = Vec::new();
        let mut state = ListViewState::new();
        let mut term = TestTerminal::new();

        term.render_stateful_widget(CharacterList::new(&refs), term.area(), &mut state);

        assert!(term.buffer_contains("Characters (0)"));
        assert!(!term.buffer_contains("▶"));
    }
}
