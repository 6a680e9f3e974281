//! ratewatch-tui - Terminal UI for ratewatch
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! theme, screen layout, widgets, rendering, event polling, and the main
//! event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
