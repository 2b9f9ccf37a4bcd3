//! Input handling for the native player.
//!
//! Terminal events are turned into [`Command`]s here and applied to the
//! session by the main loop.

mod keyboard;

pub use keyboard::handle_key_event;

use crossterm::event::Event;

/// Something the user asked the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    StepForward,
    StepBackward,
    /// Jump to the oldest frame still in history
    SeekStart,
    SpeedUp,
    SpeedDown,
    ToggleVectors,
    ToggleHelp,
    /// Terminal size changed, repaint everything
    Redraw,
}

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, help_visible: bool) -> Option<Command> {
    match event {
        Event::Key(key) => handle_key_event(key, help_visible),
        Event::Resize(_, _) => Some(Command::Redraw),
        _ => None, // Ignore focus events, mouse, paste
    }
}
