//! Screen layout definitions for the TUI
//!
//! Provides the vertical split for the main UI, with dynamic footer height
//! based on whether a last-updated stamp is shown.

use ratatui::layout::{Constraint, Layout, Rect};
use ratewatch_core::LastUpdated;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + base currency + keybindings)
    pub header: Rect,

    /// Main content area (rate table)
    pub rates: Rect,

    /// Page footer (disclaimer, optional last-updated stamp, copyright)
    pub footer: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `last_updated` - Footer input; a known stamp adds one footer row
pub fn create(area: Rect, last_updated: &LastUpdated) -> ScreenAreas {
    // Footer rows: top border + disclaimer + optional stamp + copyright
    let footer_height = if last_updated.is_known() { 4 } else { 3 };

    let constraints = vec![
        Constraint::Length(3),             // Header (glass container)
        Constraint::Min(3),                // Rate table (remaining space)
        Constraint::Length(footer_height), // Page footer
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        rates: chunks[1],
        footer: chunks[2],
    }
}
