//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use ratewatch_app::{InputKey, Message};
use ratewatch_core::prelude::*;

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(Message::Key(to_input_key(key))))
            }
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout so clock-derived text stays current
        Ok(Some(Message::Tick))
    }
}

/// Reduce a raw key event to the app-level key enum
fn to_input_key(key: KeyEvent) -> InputKey {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputKey::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        _ => InputKey::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_plain_char_maps_to_char() {
        assert_eq!(to_input_key(key(KeyCode::Char('q'))), InputKey::Char('q'));
        assert_eq!(to_input_key(key(KeyCode::Char('R'))), InputKey::Char('R'));
    }

    #[test]
    fn test_ctrl_char_maps_to_ctrl() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(to_input_key(event), InputKey::Ctrl('c'));

        let upper = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL);
        assert_eq!(to_input_key(upper), InputKey::Ctrl('c'));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(to_input_key(key(KeyCode::Esc)), InputKey::Esc);
        assert_eq!(to_input_key(key(KeyCode::Enter)), InputKey::Enter);
        assert_eq!(to_input_key(key(KeyCode::F(5))), InputKey::Other);
    }
}
