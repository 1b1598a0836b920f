//! Headless mode - JSON output of the routed view
//!
//! Runs the same fetch and update path as the TUI, then prints the view the
//! current route would show as a single JSON document on stdout:
//!
//! - list route: array of the characters matching the query
//! - detail route: the lookup outcome tagged with `state`
//!
//! ```json
//! {"state":"resolved","character":{"id":2,"name":"Morty Smith","status":"Alive","species":"Human","type":"","gender":"Male"}}
//! ```

pub mod runner;

use std::io::{self, Write};

use serde::Serialize;
use tracing::error;

use cdex_app::state::AppState;
use cdex_core::{Character, DetailView};

/// The routed view, ready to serialize
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum HeadlessView<'a> {
    /// `/` and unmatched routes
    List(Vec<&'a Character>),
    /// `/character/:id`
    Detail(DetailView<'a>),
}

impl<'a> HeadlessView<'a> {
    /// View for the current route
    pub fn from_state(state: &'a AppState) -> Self {
        match state.detail_view() {
            Some(detail) => HeadlessView::Detail(detail),
            None => HeadlessView::List(state.visible_characters()),
        }
    }

    /// Write this view to stdout as one line of JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless view: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless view to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }
}
