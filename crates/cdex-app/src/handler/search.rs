//! Search query handlers

use crate::state::AppState;

use super::UpdateResult;

/// Replace the query text and keep the cursor in range
pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    state.search.set(text);
    state.clamp_cursor();
    UpdateResult::none()
}

pub fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    state.search.clear();
    state.clamp_cursor();
    UpdateResult::none()
}
