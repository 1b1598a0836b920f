//! Configuration types for cdex
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings` - Data source endpoint and request timeout
//! - `UiSettings` - Display fallbacks and placeholder behavior

use std::time::Duration;

use cdex_api::{ApiError, HttpCharacterSource, DEFAULT_ENDPOINT};
use cdex_core::DEFAULT_TYPE_FALLBACK;
use serde::{Deserialize, Serialize};

/// Global settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Data source settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Character listing endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Build the HTTP source for these settings
    pub fn http_source(&self) -> Result<HttpCharacterSource, ApiError> {
        match self.timeout() {
            Some(timeout) => HttpCharacterSource::with_timeout(&self.endpoint, timeout),
            None => HttpCharacterSource::new(&self.endpoint),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Shown in place of an empty `type`
    #[serde(default = "default_type_fallback")]
    pub type_fallback: String,

    /// Render "not found" and "invalid id" instead of the shared
    /// `Loading...` placeholder
    #[serde(default)]
    pub distinguish_unresolved: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            type_fallback: default_type_fallback(),
            distinguish_unresolved: false,
        }
    }
}

fn default_type_fallback() -> String {
    DEFAULT_TYPE_FALLBACK.to_string()
}
