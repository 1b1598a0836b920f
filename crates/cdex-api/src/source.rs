//! The data source seam

use cdex_core::{Character, CharacterCollection};

use crate::error::ApiError;

/// One-shot read of the character collection
///
/// The app calls this exactly once per session.
#[trait_variant::make(CharacterSource: Send)]
pub trait LocalCharacterSource {
    /// Fetch the collection; any failure abandons the attempt
    async fn fetch_characters(&self) -> Result<CharacterCollection, ApiError>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}

/// In-memory source returning a fixed outcome
///
/// Used by headless tests and by the app's handler tests.
#[derive(Debug, Clone)]
pub struct StaticCharacterSource {
    outcome: Result<Vec<Character>, u16>,
}

impl StaticCharacterSource {
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            outcome: Ok(characters),
        }
    }

    /// A source that always answers with the given HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
        }
    }
}

impl CharacterSource for StaticCharacterSource {
    async fn fetch_characters(&self) -> Result<CharacterCollection, ApiError> {
        match &self.outcome {
            Ok(characters) => Ok(CharacterCollection::new(characters.clone())),
            Err(status) => Err(ApiError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
