//! Keyboard input handling for the native player.
//!
//! Maps key presses to player commands. Nothing here touches playback
//! state; the session applies the command.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Command;

/// Translate a key event into a command.
///
/// While the help overlay is showing, any key closes it.
pub fn handle_key_event(key: KeyEvent, help_visible: bool) -> Option<Command> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if help_visible {
        return Some(Command::ToggleHelp);
    }

    let command = match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,

        // === Toggles ===
        KeyCode::Char('?') => Command::ToggleHelp,
        KeyCode::Char('v') => Command::ToggleVectors,

        // === Playback controls ===
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::SpeedUp,
        KeyCode::Char('-') | KeyCode::Char('_') => Command::SpeedDown,

        // === Stepping ===
        KeyCode::Right | KeyCode::Char('.') => Command::StepForward,
        KeyCode::Left | KeyCode::Char(',') => Command::StepBackward,
        KeyCode::Home => Command::SeekStart,

        _ => return None,
    };
    Some(command)
}
