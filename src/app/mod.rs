//! Application entry - error reporting and the TUI launch

use cdex_app::config::Settings;
use cdex_core::prelude::*;
use cdex_tui::LaunchOptions;

/// Main application entry point
///
/// Installs error reporting, then runs the TUI until the user quits. File
/// logging is started by the binary before settings are loaded.
pub async fn run(settings: Settings, options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    info!("Endpoint: {}", settings.api.endpoint);

    let result = cdex_tui::run(settings, options).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(dir) = cdex_core::logging::get_log_directory() {
            eprintln!("Logs: {}", dir.display());
        }
    }

    info!("cdex exiting");
    result
}
