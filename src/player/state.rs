//! Player state management
//!
//! Contains the `PlaybackState` data owned by the playback clock, as well
//! as shared types used across player modules.

use std::time::{Duration, Instant};

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player normally
    Quit,
}

/// Whether the timeline is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playing,
    Paused,
}

/// Timing state of one playback session.
///
/// Only [`PlaybackClock`](super::clock::PlaybackClock) mutates this, in
/// response to tick, seek, step, pause and speed events.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Index of the frame currently on screen
    pub index: usize,
    /// Whether playback is paused
    pub paused: bool,
    /// Wall-clock time the frame on screen was scheduled to appear; the
    /// next one is due `step` later
    pub deadline: Instant,
    /// Wall-clock duration of one simulation step at the current speed
    pub step: Duration,
}

impl PlaybackState {
    /// Fresh state: playing from frame 0, shown from `now`.
    pub fn new(step: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            paused: false,
            deadline: now,
            step,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.paused {
            Mode::Paused
        } else {
            Mode::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let now = Instant::now();
        let state = PlaybackState::new(Duration::from_millis(50), now);

        assert_eq!(state.index, 0);
        assert!(!state.paused);
        assert_eq!(state.deadline, now);
        assert_eq!(state.step, Duration::from_millis(50));
        assert_eq!(state.mode(), Mode::Playing);
    }

    #[test]
    fn paused_flag_maps_to_mode() {
        let mut state = PlaybackState::new(Duration::from_millis(10), Instant::now());
        state.paused = true;
        assert_eq!(state.mode(), Mode::Paused);
    }

    #[test]
    fn input_result_enum_variants() {
        assert_eq!(InputResult::Continue, InputResult::Continue);
        assert_ne!(InputResult::Quit, InputResult::Continue);
    }
}
