//! Main update function - handles state transitions (TEA pattern)

use cdex_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{fetch, keys::handle_key, navigation, search, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::RequestQuit => {
            // No unsaved state to confirm; quitting is immediate
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Data Source Messages
        // ─────────────────────────────────────────────────────────
        Message::Started => fetch::handle_started(state),
        Message::CharactersLoaded { characters } => {
            fetch::handle_characters_loaded(state, characters)
        }
        Message::CharactersFetchFailed { error } => fetch::handle_fetch_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::SearchInput { text } => search::handle_search_input(state, text),
        Message::ClearSearch => search::handle_clear_search(state),

        // ─────────────────────────────────────────────────────────
        // List Cursor Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::SelectNext => navigation::handle_select_next(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
        Message::SelectFirst => navigation::handle_select_first(state),
        Message::SelectLast => navigation::handle_select_last(state),
        Message::OpenSelected => navigation::handle_open_selected(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => navigation::handle_navigate(state, &path),
        Message::ShowCharacter { id } => navigation::handle_show_character(state, id),
        Message::NavigateBack => navigation::handle_navigate_back(state),
    }
}
