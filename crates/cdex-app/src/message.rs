//! Message types for the application (TEA pattern)

use cdex_core::{CharacterCollection, CharacterId};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// First frame is on screen; triggers the one-time fetch
    Started,

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (Esc on an empty list route)
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Data Source Messages
    // ─────────────────────────────────────────────────────────
    /// The fetch completed with a collection
    CharactersLoaded { characters: CharacterCollection },
    /// The fetch was abandoned (transport error or non-success status)
    CharactersFetchFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the search query text (controlled input)
    SearchInput { text: String },
    /// Clear the search query
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // List Cursor Messages
    // ─────────────────────────────────────────────────────────
    /// Move the list cursor up one entry
    SelectPrevious,
    /// Move the list cursor down one entry
    SelectNext,
    /// Move the list cursor up one page
    PageUp,
    /// Move the list cursor down one page
    PageDown,
    /// Move the list cursor to the first entry
    SelectFirst,
    /// Move the list cursor to the last entry
    SelectLast,
    /// Open the entry under the cursor
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Navigate to an arbitrary path (pushes history)
    Navigate { path: String },
    /// Navigate to a character's detail path
    ShowCharacter { id: CharacterId },
    /// Go back one history entry
    NavigateBack,
}
