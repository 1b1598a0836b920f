//! Color palette for the portal-green theme.
//!
//! A dark backdrop with portal-green accents.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 14, 12); // Terminal backdrop
pub const CARD_BG: Color = Color::Rgb(16, 22, 19); // Panel backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Rgb(151, 206, 76); // Focused borders (portal green)

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(151, 206, 76); // Portal green
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Loaded
pub const STATUS_YELLOW: Color = Color::Yellow; // Loading
