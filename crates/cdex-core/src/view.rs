//! Pure view functions over the character collection
//!
//! The list view is `(collection, query) -> ordered subset` and the detail
//! view is `(collection, requested id) -> DetailView`. Neither mutates
//! anything; the renderer and the headless runner both build on them.

use serde::Serialize;

use crate::route::RouteError;
use crate::types::{Character, CharacterCollection, CharacterId, LoadState, SearchQuery};

/// Label shown for an empty `type` field
pub const DEFAULT_TYPE_FALLBACK: &str = "N/A";

/// Characters whose name contains `query` (case-insensitive), in fetch order
pub fn filter_characters<'a>(
    collection: &'a CharacterCollection,
    query: &SearchQuery,
) -> Vec<&'a Character> {
    collection
        .iter()
        .filter(|character| query.matches(&character.name))
        .collect()
}

/// Outcome of resolving a detail route against the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailView<'a> {
    /// Exactly one character matched
    Resolved { character: &'a Character },
    /// No match yet and the fetch has not settled
    Loading { id: CharacterId },
    /// The fetch settled and no character carries this id
    NotFound { id: CharacterId },
    /// The route segment is not an integer
    InvalidId { segment: String },
}

impl<'a> DetailView<'a> {
    pub fn character(&self) -> Option<&'a Character> {
        match self {
            DetailView::Resolved { character } => Some(character),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DetailView::Resolved { .. })
    }
}

/// Look up the requested character
///
/// The first element with a matching id wins; ids are unique upstream so at
/// most one element is ever considered.
pub fn resolve_detail<'a>(
    collection: &'a CharacterCollection,
    load_state: &LoadState,
    requested: Result<CharacterId, RouteError>,
) -> DetailView<'a> {
    let id = match requested {
        Ok(id) => id,
        Err(RouteError::EmptyId) => {
            return DetailView::InvalidId {
                segment: String::new(),
            }
        }
        Err(RouteError::NotAnInteger(segment)) => return DetailView::InvalidId { segment },
    };

    match collection.iter().find(|character| character.id == id) {
        Some(character) => DetailView::Resolved { character },
        None if load_state.is_settled() => DetailView::NotFound { id },
        None => DetailView::Loading { id },
    }
}
