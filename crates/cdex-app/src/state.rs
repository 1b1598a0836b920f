//! Application state (Model in TEA pattern)

use chrono::Local;

use cdex_core::{
    filter_characters, resolve_detail, AppPhase, Character, CharacterCollection, DetailView,
    LoadState, Route, SearchQuery,
};

use crate::config::Settings;
use crate::list_view_state::ListViewState;
use crate::router::Router;

/// Complete application state (the Model in TEA)
///
/// Owned by the runner and lent to `update()` and the view; nothing outside
/// it holds session state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Application lifecycle phase
    pub phase: AppPhase,

    /// Configuration settings
    pub settings: Settings,

    /// The fetched collection; empty until the fetch succeeds
    pub characters: CharacterCollection,

    /// Progress of the one-time fetch
    pub load_state: LoadState,

    /// Current search text
    pub search: SearchQuery,

    /// Current route and back history
    pub router: Router,

    /// Cursor over the filtered list
    pub list_view_state: ListViewState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    /// The list view: characters matching the search, in fetch order
    pub fn visible_characters(&self) -> Vec<&Character> {
        filter_characters(&self.characters, &self.search)
    }

    /// The detail view for the current route, if it is a detail route
    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        self.route()
            .character_id()
            .map(|requested| resolve_detail(&self.characters, &self.load_state, requested))
    }

    /// Character under the list cursor
    pub fn selected_character(&self) -> Option<&Character> {
        self.visible_characters()
            .get(self.list_view_state.selected)
            .copied()
    }

    /// Mark the fetch as started; returns false if it already was
    pub fn begin_fetch(&mut self) -> bool {
        if self.load_state != LoadState::Idle {
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Populate the collection (first successful fetch only)
    pub fn set_characters(&mut self, characters: CharacterCollection) {
        if matches!(self.load_state, LoadState::Loaded { .. }) {
            return;
        }
        self.load_state = LoadState::Loaded {
            count: characters.len(),
            at: Local::now(),
        };
        self.characters = characters;
        self.clamp_cursor();
    }

    pub fn fetch_failed(&mut self, error: impl Into<String>) {
        self.load_state = LoadState::Failed {
            error: error.into(),
        };
    }

    /// Keep the list cursor inside the filtered list
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_characters().len();
        self.list_view_state.clamp(len);
    }
}
