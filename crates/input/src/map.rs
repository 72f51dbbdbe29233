//! Key mapping from terminal events to player commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command. Unrecognized keys yield `None`.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Rotation
        KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::RotateLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::RotateRight),

        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveBackward),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::StrafeRight),

        // Render mode
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::ToggleShading),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
