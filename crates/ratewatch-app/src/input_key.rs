//! Terminal-agnostic key representation
//!
//! Keeps the app layer free of a crossterm dependency; the TUI layer maps
//! raw key events into this enum before handing them to the update function.

/// A pressed key, reduced to what the handlers care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    Ctrl(char),
    Enter,
    Esc,
    /// Any key the handlers have no binding for
    Other,
}

impl InputKey {
    /// Normalized character for binding lookups (uppercase folded)
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c.to_ascii_lowercase()),
            _ => None,
        }
    }
}
