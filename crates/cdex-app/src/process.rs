//! Message processing
//!
//! Runs a message through the TEA update function, follows up chained
//! messages, and dispatches any resulting actions.

use std::sync::Arc;

use cdex_api::CharacterSource;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: CharacterSource + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use cdex_api::StaticCharacterSource;
    use cdex_core::{Character, CharacterId, LoadState};

    fn morty() -> Character {
        Character {
            id: CharacterId(2),
            name: "Morty Smith".to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            kind: String::new(),
            gender: "Male".to_string(),
        }
    }

    #[tokio::test]
    async fn test_started_round_trip_through_channel() {
        let mut state = AppState::new();
        let (tx, mut rx) = mpsc::channel(8);
        let source = Arc::new(StaticCharacterSource::new(vec![morty()]));

        process_message(&mut state, Message::Started, &tx, &source);
        assert_eq!(state.load_state, LoadState::Loading);

        let msg = rx.recv().await.unwrap();
        process_message(&mut state, msg, &tx, &source);

        assert_eq!(state.characters.len(), 1);
        assert!(matches!(state.load_state, LoadState::Loaded { count: 1, .. }));
    }

    #[tokio::test]
    async fn test_failed_fetch_round_trip() {
        let mut state = AppState::new();
        let (tx, mut rx) = mpsc::channel(8);
        let source = Arc::new(StaticCharacterSource::failing(404));

        process_message(&mut state, Message::Started, &tx, &source);
        let msg = rx.recv().await.unwrap();
        process_message(&mut state, msg, &tx, &source);

        assert!(state.characters.is_empty());
        assert!(matches!(state.load_state, LoadState::Failed { .. }));
    }

    #[tokio::test]
    async fn test_follow_up_messages_are_processed() {
        let mut state = AppState::new();
        state.set_characters(vec![morty()].into());
        let (tx, _rx) = mpsc::channel(8);
        let source = Arc::new(StaticCharacterSource::new(vec![]));

        // Enter -> OpenSelected -> ShowCharacter
        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &source);

        assert_eq!(state.route().path(), "/character/2");
    }
}
