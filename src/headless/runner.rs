//! Headless mode runner - fetch once, print, exit

use cdex_api::CharacterSource;
use cdex_app::actions::fetch_message;
use cdex_app::config::Settings;
use cdex_app::handler::update;
use cdex_app::message::Message;
use cdex_app::state::AppState;
use cdex_app::UpdateAction;
use cdex_core::prelude::*;
use cdex_tui::LaunchOptions;

use super::HeadlessView;

/// Run in headless mode - print the routed view as JSON instead of the TUI
pub async fn run_headless(settings: Settings, options: LaunchOptions) -> Result<()> {
    info!("Headless mode, endpoint: {}", settings.api.endpoint);

    let source = settings.api.http_source()?;
    let state = load_state(settings, &options, &source).await;

    HeadlessView::from_state(&state).emit();

    info!("cdex headless mode exiting");
    Ok(())
}

/// Drive the start-up messages through `update()` with the fetch awaited inline
pub async fn load_state<S>(settings: Settings, options: &LaunchOptions, source: &S) -> AppState
where
    S: CharacterSource + Sync,
{
    let mut state = options.initial_state(settings);

    let mut pending = Some(Message::Started);
    while let Some(message) = pending.take() {
        let result = update(&mut state, message);

        if let Some(UpdateAction::FetchCharacters) = result.action {
            // The follow-up message (if any) runs after the fetch outcome
            let outcome = fetch_message(source).await;
            update(&mut state, outcome);
        }

        pending = result.message;
    }

    state
}
