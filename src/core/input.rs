/// Raw key presses, reduced to what games care about
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// A single printable character, as typed.
    Char(char),
    Delete,
    Confirm,
    /// Any other key, by name ("Tab", "F5", "Ctrl+x", ...).
    Named(String),
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(c) if chorded => KeyInput::Named(format!("{}+{}", key.modifiers, c)),
            KeyCode::Char(c) if !c.is_control() => KeyInput::Char(c),
            KeyCode::Backspace => KeyInput::Delete,
            KeyCode::Enter => KeyInput::Confirm,
            other => KeyInput::Named(other.to_string()),
        }
    }
}

/// Keys that leave the program, whatever the game is doing.
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
