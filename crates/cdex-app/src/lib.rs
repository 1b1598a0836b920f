//! cdex-app - Application state and orchestration for cdex
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the `AppState` model, the `Message` enum, the `update()`
//! function, and the action dispatch that runs the one-time character fetch.
//! It also owns configuration loading and OS signal handling.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod list_view_state;
pub mod message;
pub mod process;
pub mod router;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use router::Router;
pub use state::AppState;
