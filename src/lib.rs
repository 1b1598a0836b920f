//! cdex Library
//!
//! A terminal browser for the Rick and Morty character API.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::run;
pub use headless::runner::run_headless;
