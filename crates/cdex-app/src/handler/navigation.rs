//! List cursor and route handlers

use cdex_core::{CharacterId, Route};

use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.list_view_state.select_previous();
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let len = state.visible_characters().len();
    state.list_view_state.select_next(len);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.list_view_state.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let len = state.visible_characters().len();
    state.list_view_state.page_down(len);
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.list_view_state.select_first();
    UpdateResult::none()
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    let len = state.visible_characters().len();
    state.list_view_state.select_last(len);
    UpdateResult::none()
}

/// Activate the entry under the cursor
pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    match state.selected_character() {
        Some(character) => UpdateResult::message(Message::ShowCharacter { id: character.id }),
        None => UpdateResult::none(),
    }
}

pub fn handle_navigate(state: &mut AppState, path: &str) -> UpdateResult {
    state.router.push(Route::parse(path));
    UpdateResult::none()
}

pub fn handle_show_character(state: &mut AppState, id: CharacterId) -> UpdateResult {
    state.router.push(Route::character(id));
    UpdateResult::none()
}

pub fn handle_navigate_back(state: &mut AppState) -> UpdateResult {
    state.router.back();
    UpdateResult::none()
}
