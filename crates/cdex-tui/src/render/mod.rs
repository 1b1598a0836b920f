//! Main render/view function (View in TEA pattern)


use super::{layout, widgets};
use cdex_app::state::AppState;
use cdex_core::filter_characters;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (visible rows).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let show_detail = state.route().is_detail();
    let areas = layout::create(area, show_detail);

    let header = widgets::MainHeader::new(&state.load_state).with_back(show_detail);
    frame.render_widget(header, areas.header);

    // Field-level borrows so the list can report its height into the cursor state
    let visible = filter_characters(&state.characters, &state.search);

    let search = widgets::SearchInput::new(&state.search).with_matches(visible.len());
    frame.render_widget(search, areas.search);

    let list = widgets::CharacterList::new(&visible).focused(!show_detail);
    frame.render_stateful_widget(list, areas.list, &mut state.list_view_state);

    if let (Some(detail_area), Some(detail_view)) = (areas.detail, state.detail_view()) {
        let detail = widgets::CharacterDetail::new(&detail_view)
            .type_fallback(&state.settings.ui.type_fallback)
            .distinguish_unresolved(state.settings.ui.distinguish_unresolved);
        frame.render_widget(detail, detail_area);
    }
}
