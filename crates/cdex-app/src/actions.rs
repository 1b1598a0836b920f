//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use cdex_api::CharacterSource;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: CharacterSource + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchCharacters => {
            spawn_fetch(msg_tx, source);
        }
    }
}

/// Fire-and-forget fetch; the outcome comes back as a message
pub fn spawn_fetch<S>(msg_tx: mpsc::Sender<Message>, source: Arc<S>) -> tokio::task::JoinHandle<()>
where
    S: CharacterSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = fetch_message(source.as_ref()).await;
        if msg_tx.send(message).await.is_err() {
            // Event loop already gone (quit mid-flight)
            info!("Fetch finished after shutdown; result dropped");
        }
    })
}

/// Run the fetch and convert the outcome into a message
pub async fn fetch_message<S>(source: &S) -> Message
where
    S: CharacterSource + Sync,
{
    match source.fetch_characters().await {
        Ok(characters) => Message::CharactersLoaded { characters },
        Err(e) => {
            error!("Fetch from {} failed: {}", source.describe(), e);
            Message::CharactersFetchFailed {
                error: e.to_string(),
            }
        }
    }
}
