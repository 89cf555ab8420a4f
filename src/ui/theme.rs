//! Color theme constants for the askdata UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the focused input
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Active elements (the Ask button, the loading spinner) - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Text typed into the question input
pub const COLOR_INPUT_TEXT: Color = Color::Gray;

/// Numbered narrative headings
pub const COLOR_HEADING: Color = Color::Cyan;

/// Disclosed SQL text - blue #007ACC
pub const COLOR_SQL: Color = Color::Rgb(0, 122, 204);

/// Table header row
pub const COLOR_TABLE_HEADER: Color = Color::White;

/// Error narrative
pub const COLOR_ERROR: Color = Color::Red;
