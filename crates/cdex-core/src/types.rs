//! Core domain type definitions

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Application state enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Application is starting, nothing drawn yet
    #[default]
    Initializing,
    /// Event loop is running
    Running,
    /// Application is shutting down
    Quitting,
}

/// Stable integer identifier assigned by the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CharacterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single character record as returned by the API
///
/// Upstream sends more fields (origin, location, image, ...); they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Sub-type; the empty string means "not applicable"
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
}

impl Character {
    /// Display value for `kind`, substituting `fallback` for the empty string
    pub fn kind_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.kind.is_empty() {
            fallback
        } else {
            &self.kind
        }
    }
}

/// Ordered sequence of characters, populated once per session
///
/// Derefs to a slice in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterCollection {
    characters: Vec<Character>,
}

impl CharacterCollection {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }
}

impl Deref for CharacterCollection {
    type Target = [Character];

    fn deref(&self) -> &Self::Target {
        &self.characters
    }
}

impl From<Vec<Character>> for CharacterCollection {
    fn from(characters: Vec<Character>) -> Self {
        Self::new(characters)
    }
}

/// Case-insensitive substring filter on character names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let mut query = Self::default();
        query.set(text);
        query
    }

    /// The text as typed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole query
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.folded = self.text.to_lowercase();
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.folded = self.text.to_lowercase();
    }

    /// Remove the last character; returns false when already empty
    pub fn pop(&mut self) -> bool {
        let removed = self.text.pop().is_some();
        self.folded = self.text.to_lowercase();
        removed
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.folded.clear();
    }

    /// Whether `name` contains this query, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.folded.is_empty() || name.to_lowercase().contains(&self.folded)
    }
}

/// Lifecycle of the one-time character fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch not started yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Collection populated
    Loaded { count: usize, at: DateTime<Local> },
    /// Fetch abandoned; the collection stays empty
    Failed { error: String },
}

impl LoadState {
    /// True once the fetch has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Loaded { .. } | LoadState::Failed { .. })
    }

    /// Short label for the header
    pub fn label(&self) -> String {
        match self {
            LoadState::Idle => "Waiting".to_string(),
            LoadState::Loading => "Loading...".to_string(),
            LoadState::Loaded { count, at } => {
                format!("{} characters · {}", count, at.format("%H:%M:%S"))
            }
            LoadState::Failed { .. } => "0 characters".to_string(),
        }
    }
}
