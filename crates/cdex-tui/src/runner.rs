//! Main TUI runner - entry points and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: Entry point that fetches from the configured HTTP endpoint
//! - `run_with_source`: Entry point for any [`CharacterSource`]
//! - `run_loop`: Main event loop processing terminal and channel messages

use std::sync::Arc;

use tokio::sync::mpsc;

use cdex_api::CharacterSource;
use cdex_app::config::Settings;
use cdex_app::message::Message;
use cdex_app::process;
use cdex_app::router::Router;
use cdex_app::signals;
use cdex_app::state::AppState;
use cdex_core::prelude::*;

use super::{event, render, terminal};

/// Startup options that come from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Initial route (deep link), e.g. `/character/2`
    pub route: Option<String>,

    /// Initial search text
    pub query: Option<String>,
}

impl LaunchOptions {
    /// Initial state for these options
    pub fn initial_state(&self, settings: Settings) -> AppState {
        let mut state = AppState::with_settings(settings);
        if let Some(route) = &self.route {
            state.router = Router::new(route);
        }
        if let Some(query) = &self.query {
            state.search.set(query.as_str());
        }
        state
    }
}

/// Run the TUI against the endpoint from `settings`
pub async fn run(settings: Settings, options: LaunchOptions) -> Result<()> {
    let source = settings.api.http_source()?;
    info!("Fetching characters from {}", source.endpoint());
    run_with_source(settings, options, Arc::new(source)).await
}

/// Run the TUI with a specific character source
pub async fn run_with_source<S>(
    settings: Settings,
    options: LaunchOptions,
    source: Arc<S>,
) -> Result<()>
where
    S: CharacterSource + Send + Sync + 'static,
{
    let mut state = options.initial_state(settings);
    info!("Starting on route {}", state.route());

    let mut term = terminal::enter()?;

    // Unified message channel (fetch results, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &source);

    terminal::leave();

    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
) -> Result<()>
where
    S: CharacterSource + Send + Sync + 'static,
{
    // First frame goes out before the fetch starts
    terminal
        .draw(|frame| render::view(frame, state))
        .context("Failed to draw first frame")?;
    process::process_message(state, Message::Started, &msg_tx, source);

    while !state.should_quit() {
        // Process external messages (fetch result, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, source);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, source);
        }
    }

    Ok(())
}
