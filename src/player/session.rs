//! One replay session: a frame timeline, its clock and its color table.
//!
//! The session is everything the render loop needs that is not the
//! terminal itself, so it can be driven from tests with synthetic
//! instants.

use std::io::Read;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ReplayError;
use crate::player::clock::{validate_speed, PlaybackClock};
use crate::player::color::AgentColorPolicy;
use crate::player::input::Command;
use crate::player::mapper::{CoordinateMapper, Domain};
use crate::player::playback::Timeline;
use crate::player::render::{build_scene, Scene, SceneStyle, StatusInfo};
use crate::player::state::InputResult;
use crate::records::{Frame, FrameSource};
use crate::theme::AgentPalette;

/// Poll interval while nothing is scheduled.
pub const IDLE_TICK: Duration = Duration::from_millis(33);

/// Outcome of advancing the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Playing ran past the last frame
    Finished,
}

pub struct Session<R: Read> {
    timeline: Timeline<R>,
    clock: PlaybackClock,
    colors: AgentColorPolicy,
    domain: Domain,
    style: SceneStyle,
    padding: u16,
    show_help: bool,
    needs_render: bool,
}

impl<R: Read> Session<R> {
    /// Read the first two frames and set up pacing.
    ///
    /// Fails before any terminal setup when the speed is invalid or the
    /// stream is empty, too short or malformed in its first frames.
    pub fn open(
        source: FrameSource<R>,
        config: &Config,
        palette: AgentPalette,
        now: Instant,
    ) -> Result<Self, ReplayError> {
        validate_speed(config.playback.speed)?;

        let mut timeline = Timeline::new(source, config.playback.history_capacity);
        let timestamps = timeline.prime()?;
        let clock = PlaybackClock::new(&timestamps, config.playback.speed, now)?;

        info!(
            dt = clock.dt(),
            speed = clock.speed(),
            history = timeline.history_capacity(),
            "session opened"
        );

        Ok(Self {
            timeline,
            clock,
            colors: AgentColorPolicy::new(palette),
            domain: config.domain.to_domain(),
            style: SceneStyle {
                direction_vectors: config.render.direction_vectors,
                draw_cores: config.render.draw_cores,
                arrow_scale: config.render.arrow_scale,
                core_radius: config.domain.r_min,
            },
            padding: config.render.padding,
            show_help: false,
            needs_render: true,
        })
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn index(&self) -> usize {
        self.clock.index()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    pub fn padding(&self) -> u16 {
        self.padding
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Called by the loop after a frame has been presented.
    pub fn mark_rendered(&mut self) {
        self.needs_render = false;
    }

    /// Frames parsed from the stream so far.
    pub fn frames_read(&self) -> usize {
        self.timeline.frames_read()
    }

    pub fn colors(&self) -> &AgentColorPolicy {
        &self.colors
    }

    /// Frame currently on screen.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.timeline.get(self.clock.index())
    }

    /// Whether the frame on screen is the last one in the stream.
    pub fn at_end(&self) -> bool {
        self.timeline.is_exhausted()
            && self
                .timeline
                .window()
                .is_some_and(|(_, newest)| self.clock.index() >= newest)
    }

    /// How long the loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.clock.is_paused() {
            IDLE_TICK
        } else {
            self.clock.time_until_due(now)
        }
    }

    /// Apply one user command.
    pub fn apply(&mut self, command: Command, now: Instant) -> Result<InputResult, ReplayError> {
        match command {
            Command::Quit => return Ok(InputResult::Quit),
            Command::TogglePause => self.clock.toggle_pause(now),
            Command::StepForward => {
                let next = self.clock.index() + 1;
                // Pull the next frame in so the bound below is known
                self.timeline.fetch(next)?;
                let newest = self.newest_index();
                if !self.clock.step_forward(newest) {
                    debug!(index = self.clock.index(), "step forward ignored");
                }
            }
            Command::StepBackward => {
                let oldest = self.oldest_index();
                if !self.clock.step_backward(oldest) && self.clock.is_paused() {
                    debug!(oldest, "history exhausted, clamped at oldest frame");
                }
            }
            Command::SeekStart => {
                let oldest = self.oldest_index();
                self.clock.seek(oldest, now);
            }
            Command::SpeedUp => self.clock.speed_up(now)?,
            Command::SpeedDown => self.clock.speed_down(now)?,
            Command::ToggleVectors => {
                self.style.direction_vectors = !self.style.direction_vectors;
            }
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Redraw => {}
        }
        self.needs_render = true;
        Ok(InputResult::Continue)
    }

    /// Move the clock forward if a frame is due.
    ///
    /// Returns [`Flow::Finished`] when playing runs past the last frame.
    pub fn advance(&mut self, now: Instant) -> Result<Flow, ReplayError> {
        if !self.clock.tick(now) {
            return Ok(Flow::Continue);
        }
        let index = self.clock.index();
        if self.timeline.fetch(index)?.is_none() {
            if self.timeline.is_exhausted() {
                info!(frames = self.timeline.frames_read(), "playback finished");
                return Ok(Flow::Finished);
            }
            // Only reachable with a ring smaller than the read-ahead
            warn!(index, "frame missing from history");
        }
        self.needs_render = true;
        Ok(Flow::Continue)
    }

    /// Build the scene for the frame on screen.
    pub fn scene(&mut self, mapper: &CoordinateMapper) -> Option<Scene> {
        let index = self.clock.index();
        let frame = self.timeline.get(index)?;
        Some(build_scene(
            frame,
            index,
            mapper,
            &mut self.colors,
            &self.style,
        ))
    }

    /// Status bar contents for a scene.
    pub fn status(&self, scene: Option<&Scene>) -> StatusInfo {
        StatusInfo {
            paused: self.clock.is_paused(),
            index: self.clock.index(),
            time: scene.map_or(0.0, |s| s.time),
            speed: self.clock.speed(),
            visible: scene.map_or(0, |s| s.agents.len()),
            total: scene.map_or(0, Scene::total_agents),
            direction_vectors: self.style.direction_vectors,
            at_end: self.at_end(),
        }
    }

    fn oldest_index(&self) -> usize {
        self.timeline.window().map_or(0, |(oldest, _)| oldest)
    }

    fn newest_index(&self) -> usize {
        self.timeline.window().map_or(0, |(_, newest)| newest)
    }
}
