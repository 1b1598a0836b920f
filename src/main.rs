//! cdex - A terminal browser for the Rick and Morty character API
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use cdex_app::config::{self, Settings};
use cdex_core::prelude::*;
use cdex_tui::LaunchOptions;

/// cdex - Browse and search Rick and Morty characters in the terminal
#[derive(Parser, Debug)]
#[command(name = "cdex")]
#[command(about = "Browse and search Rick and Morty characters", long_about = None)]
struct Args {
    /// Character listing endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to config.toml (default: the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial route, e.g. /character/2
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Initial search text
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => config::load_settings_from(path)?,
            None => config::load_settings(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.api.endpoint = endpoint.clone();
        }

        Ok(settings)
    }

    /// Start logging first so warnings from config loading reach the log
    fn prepare(
        &self,
        init_logging: impl FnOnce() -> Result<()>,
    ) -> Result<(Settings, LaunchOptions)> {
        init_logging()?;
        Ok((self.settings()?, self.launch_options()))
    }

    fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            route: self.route.clone(),
            query: self.query.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (settings, options) = args.prepare(cdex_core::logging::init)?;

    if args.headless {
        cdex::run_headless(settings, options).await
    } else {
        cdex::run(settings, options).await
    }
}
