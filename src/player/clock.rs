//! Wall-clock pacing for frame playback.
//!
//! The clock turns a simulation step `dt` and a speed multiplier into a
//! real step duration and schedules one frame advance per step. The
//! deadline marks when the frame on screen was scheduled to appear; the next
//! frame is due one step later. Deadlines are chained (`deadline += step`)
//! rather than taken from "now", so a slow render delays a frame but never
//! shifts the rest of the timeline.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::ReplayError;
use crate::player::state::{Mode, PlaybackState};

/// Slowest speed reachable through speed controls.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest speed reachable through speed controls.
pub const MAX_SPEED: f64 = 16.0;

/// Check a speed multiplier.
pub fn validate_speed(speed: f64) -> Result<f64, ReplayError> {
    if speed > 0.0 && speed.is_finite() {
        Ok(speed)
    } else {
        Err(ReplayError::InvalidSpeed(speed))
    }
}

/// Maps simulation time to wall-clock time and owns the playback state.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    state: PlaybackState,
    dt: f64,
    speed: f64,
}

impl PlaybackClock {
    /// Build a clock from the timestamps of the first frames.
    ///
    /// `dt` is the gap between the first two timestamps, so at least two
    /// are required. The speed is checked before anything else.
    pub fn new(timestamps: &[f64], speed: f64, now: Instant) -> Result<Self, ReplayError> {
        let speed = validate_speed(speed)?;
        let (t0, t1) = match timestamps {
            [t0, t1, ..] => (*t0, *t1),
            _ => {
                return Err(ReplayError::InsufficientFrames {
                    found: timestamps.len(),
                })
            }
        };

        let dt = t1 - t0;
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(ReplayError::InvalidStep { t0, t1 });
        }
        let step = real_step(dt, speed).ok_or(ReplayError::InvalidStep { t0, t1 })?;

        Ok(Self {
            state: PlaybackState::new(step, now),
            dt,
            speed,
        })
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Simulation step between frames, in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Wall-clock duration of one frame at the current speed.
    pub fn step(&self) -> Duration {
        self.state.step
    }

    pub fn deadline(&self) -> Instant {
        self.state.deadline
    }

    /// When the frame after the current one is due.
    pub fn next_due(&self) -> Instant {
        self.state.deadline + self.state.step
    }

    /// Time left until the next frame is due, never negative.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due().saturating_duration_since(now)
    }

    /// Advance one frame if playing and the current frame has been up for
    /// a full step.
    ///
    /// Returns `true` when the index moved. When the loop has fallen
    /// behind, consecutive calls keep returning `true` until the chained
    /// deadline overtakes `now`, so late frames are rendered back-to-back
    /// instead of dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state.paused || now < self.next_due() {
            return false;
        }
        self.state.index += 1;
        self.state.deadline += self.state.step;
        true
    }

    /// Flip between playing and paused.
    ///
    /// Resuming re-anchors the deadline to `now`, so the frame on screen
    /// stays up for a full step before playback moves on.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.state.paused = !self.state.paused;
        if !self.state.paused {
            self.state.deadline = now;
        }
        debug!(paused = self.state.paused, index = self.state.index, "toggle pause");
    }

    /// Move one frame forward while paused, up to `max_index`.
    pub fn step_forward(&mut self, max_index: usize) -> bool {
        if !self.state.paused || self.state.index >= max_index {
            return false;
        }
        self.state.index += 1;
        true
    }

    /// Move one frame back while paused, down to `min_index`.
    pub fn step_backward(&mut self, min_index: usize) -> bool {
        if !self.state.paused {
            return false;
        }
        if self.state.index <= min_index {
            self.state.index = min_index;
            return false;
        }
        self.state.index -= 1;
        true
    }

    /// Jump to a frame index and restart pacing from there.
    pub fn seek(&mut self, index: usize, now: Instant) {
        self.state.index = index;
        self.state.deadline = now;
        debug!(index, "seek");
    }

    /// Change the speed multiplier, bounded to [`MIN_SPEED`, `MAX_SPEED`].
    pub fn set_speed(&mut self, speed: f64, now: Instant) -> Result<(), ReplayError> {
        let speed = validate_speed(speed)?.clamp(MIN_SPEED, MAX_SPEED);
        let step = real_step(self.dt, speed).ok_or(ReplayError::InvalidSpeed(speed))?;
        self.speed = speed;
        self.state.step = step;
        self.state.deadline = now;
        debug!(speed, step_ms = step.as_secs_f64() * 1000.0, "speed changed");
        Ok(())
    }

    /// Increase playback speed by half (max 16x).
    pub fn speed_up(&mut self, now: Instant) -> Result<(), ReplayError> {
        self.set_speed(self.speed * 1.5, now)
    }

    /// Decrease playback speed by a third (min 0.1x).
    pub fn speed_down(&mut self, now: Instant) -> Result<(), ReplayError> {
        self.set_speed(self.speed / 1.5, now)
    }
}

fn real_step(dt: f64, speed: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(dt / speed).ok()
}
