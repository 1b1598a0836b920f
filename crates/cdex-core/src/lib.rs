//! # cdex-core - Core Domain Types
//!
//! Foundation crate for cdex. Provides the character domain types, route
//! parsing, the pure list/detail view functions, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Character`] - A single upstream character record
//! - [`CharacterId`] - Stable integer identifier assigned upstream
//! - [`CharacterCollection`] - Ordered, fetched-once set of characters
//! - [`SearchQuery`] - Case-insensitive name filter
//! - [`LoadState`] - Lifecycle of the one-time fetch
//! - [`AppPhase`] - Application lifecycle phase
//!
//! ### Routing (`route`)
//! - [`Route`] - Parsed navigation path (`/` or `/character/:id`)
//! - [`parse_character_id()`] - Typed parsing of the `:id` segment
//!
//! ### Views (`view`)
//! - [`filter_characters()`] - The list view as a pure function
//! - [`resolve_detail()`] - The detail view as a pure function
//! - [`DetailView`] - Resolved / loading / not found / invalid id
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cdex_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod route;
pub mod types;
pub mod view;

/// Prelude for common imports used throughout all cdex crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use route::{parse_character_id, Route, RouteError, CHARACTER_PATH_PREFIX, ROOT_PATH};
pub use types::{AppPhase, Character, CharacterCollection, CharacterId, LoadState, SearchQuery};
pub use view::{filter_characters, resolve_detail, DetailView, DEFAULT_TYPE_FALLBACK};
