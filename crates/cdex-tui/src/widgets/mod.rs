//! Custom widget components for the TUI

mod character_detail;
mod character_list;
mod header;
mod search_input;

pub use character_detail::{CharacterDetail, UNRESOLVED_PLACEHOLDER};
pub use character_list::CharacterList;
pub use header::{MainHeader, APP_TITLE};
pub use search_input::{SearchInput, SEARCH_PLACEHOLDER};
