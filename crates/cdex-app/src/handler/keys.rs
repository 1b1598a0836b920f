//! Key event handlers
//!
//! The search input is always focused: printable keys edit the query, the
//! arrow keys drive the list cursor, Enter opens, Esc backs out.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert a key press into a message
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('u') => Some(Message::ClearSearch),

        // Controlled input: compute the next value, hand it back as a message
        InputKey::Char(c) => {
            let mut text = state.search.text().to_string();
            text.push(c);
            Some(Message::SearchInput { text })
        }
        InputKey::Backspace => {
            if state.search.is_empty() {
                return None;
            }
            let mut text = state.search.text().to_string();
            text.pop();
            Some(Message::SearchInput { text })
        }

        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::SelectFirst),
        InputKey::End => Some(Message::SelectLast),
        InputKey::Enter => Some(Message::OpenSelected),

        InputKey::Esc => handle_escape(state),

        _ => None,
    }
}

/// Esc: back out of detail, then clear the query, then quit
fn handle_escape(state: &AppState) -> Option<Message> {
    if state.router.can_go_back() {
        Some(Message::NavigateBack)
    } else if !state.search.is_empty() {
        Some(Message::ClearSearch)
    } else {
        Some(Message::RequestQuit)
    }
}
