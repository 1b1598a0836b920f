//! # cdex-api - Character Data Source
//!
//! Performs the single read of the character collection:
//!
//! - [`CharacterSource`] - the seam the app depends on
//! - [`HttpCharacterSource`] - `GET` against the REST endpoint via reqwest
//! - [`ApiError`] - transport, status and decoding failures
//! - [`CharacterPage`] - the `{ "results": [...] }` response body

pub mod client;
pub mod error;
pub mod response;
pub mod source;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpCharacterSource, DEFAULT_ENDPOINT};
pub use error::ApiError;
pub use response::{CharacterPage, PageInfo};
pub use source::{CharacterSource, LocalCharacterSource, StaticCharacterSource};
