//! Configuration file parsing for cdex
//!
//! Supports:
//! - `~/.config/cdex/config.toml` - Global settings (or `--config <path>`)

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from, CONFIG_FILENAME};
pub use types::*;
