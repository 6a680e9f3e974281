//! Color palette for the dashboard theme.
//!
//! Named terminal colors keep rendering consistent across emulators without
//! assuming truecolor support.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent (app title)

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Feed live
pub const STATUS_YELLOW: Color = Color::Yellow; // Keybinding hints

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        // Verify a few representative constants compile and are the expected type
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = STATUS_GREEN;
    }

    #[test]
    fn test_text_layers_defined() {
        let _: Color = TEXT_PRIMARY;
        let _: Color = TEXT_SECONDARY;
        let _: Color = TEXT_MUTED;
    }
}
