//! Fetch lifecycle handlers
//!
//! The collection is requested once, on the first `Started`. Failures are
//! logged and otherwise swallowed.

use cdex_core::prelude::*;
use cdex_core::{AppPhase, CharacterCollection};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Handle the first rendered frame
pub fn handle_started(state: &mut AppState) -> UpdateResult {
    if state.phase == AppPhase::Initializing {
        state.phase = AppPhase::Running;
    }

    if state.begin_fetch() {
        info!("Fetching characters from {}", state.settings.api.endpoint);
        UpdateResult::action(UpdateAction::FetchCharacters)
    } else {
        UpdateResult::none()
    }
}

/// Handle a successful fetch
pub fn handle_characters_loaded(
    state: &mut AppState,
    characters: CharacterCollection,
) -> UpdateResult {
    info!("Loaded {} characters", characters.len());
    state.set_characters(characters);
    UpdateResult::none()
}

/// Handle an abandoned fetch
pub fn handle_fetch_failed(state: &mut AppState, error: String) -> UpdateResult {
    debug!("Fetch abandoned, showing empty list: {}", error);
    state.fetch_failed(error);
    UpdateResult::none()
}
