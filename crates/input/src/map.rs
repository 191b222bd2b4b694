//! Key mapping from terminal events to button presses.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Button;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Press(Button),
    Quit,
}

/// Map a terminal key event to a button press or a quit request.
///
/// Only fresh presses count; auto-repeat and release events are ignored so
/// holding a key does not turn the snake more than once.
pub fn map_key_event(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(KeyInput::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyInput::Press(Button::A))
        }
        KeyCode::Right | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(KeyInput::Press(Button::B))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
