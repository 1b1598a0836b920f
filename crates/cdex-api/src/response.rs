//! Response body of the character listing endpoint

use cdex_core::{Character, CharacterCollection};
use serde::Deserialize;

/// Paging metadata sent alongside the results
///
/// Only the first page is ever used; the metadata is logged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
}

/// `{ "info": {...}, "results": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    pub results: Vec<Character>,
}

impl CharacterPage {
    pub fn into_collection(self) -> CharacterCollection {
        CharacterCollection::new(self.results)
    }
}
