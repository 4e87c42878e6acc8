//! Type bridge from crossterm key events to tui-textarea input
//!
//! Built by hand so the text fields do not depend on tui-textarea's own
//! crossterm feature lining up with ours.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input, Key};

/// Convert a crossterm KeyEvent into a tui-textarea Input
pub fn to_textarea_input(key: KeyEvent) -> Input {
    let key_code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        KeyCode::F(n) => Key::F(n),
        _ => Key::Null,
    };

    Input {
        key: key_code,
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_with_modifiers() {
        let input = to_textarea_input(KeyEvent::new(
            KeyCode::Char('h'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert_eq!(input.key, Key::Char('h'));
        assert!(input.ctrl);
        assert!(input.shift);
        assert!(!input.alt);
    }

    #[test]
    fn test_unmapped_key_is_null() {
        let input = to_textarea_input(KeyEvent::new(KeyCode::CapsLock, KeyModifiers::NONE));
        assert_eq!(input.key, Key::Null);
    }
}
