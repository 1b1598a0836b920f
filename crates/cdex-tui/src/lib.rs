//! cdex-tui - Terminal UI for cdex
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! TEA loop from cdex-app and adds terminal rendering, event polling, and
//! widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, run_with_source, LaunchOptions};
