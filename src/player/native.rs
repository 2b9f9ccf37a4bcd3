//! Native terminal player loop.
//!
//! Single-threaded: each iteration draws if something changed, waits for
//! input no longer than the time until the next frame is due, applies the
//! input and advances the clock.

use std::io::{self, Read, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use crate::config::Config;
use crate::player::input::handle_event;
use crate::player::render::draw_player;
use crate::player::session::{Flow, Session};
use crate::player::state::InputResult;
use crate::records::FrameSource;
use crate::theme::Theme;

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Played through to the end of the stream; carries the frames read
    Finished(usize),
    /// User quit before the end
    Interrupted,
}

/// Source of terminal events for the loop.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Live crossterm events.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Raw mode plus alternate screen, restored on drop even when the loop
/// bails out with an error.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("Failed to enter alternate screen");
        }
        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to build terminal")?;
        terminal.hide_cursor().ok();
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.terminal.show_cursor().ok();
        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
    }
}

/// Open a record file and play it in the terminal.
///
/// Every input problem (missing file, empty or short stream, bad speed,
/// malformed first frames) is reported before the terminal is touched.
pub fn play_file(path: &Path, config: &Config) -> Result<PlaybackResult> {
    let source = FrameSource::open(path)?;
    let theme = Theme::from_name(config.render.theme);
    let mut session = Session::open(source, config, theme.agents, Instant::now())
        .with_context(|| format!("Failed to load {}", path.display()))?;

    info!(file = %path.display(), "starting playback");

    let mut guard = TerminalGuard::enter()?;
    let result = run(&mut guard.terminal, &mut session, &theme, &mut TerminalEvents);
    drop(guard);

    if let Ok(outcome) = &result {
        info!(?outcome, "playback ended");
    }
    result
}

/// Drive a session until it finishes or the user quits.
pub fn run<B, R, E>(
    terminal: &mut Terminal<B>,
    session: &mut Session<R>,
    theme: &Theme,
    events: &mut E,
) -> Result<PlaybackResult>
where
    B: Backend,
    R: Read,
    E: EventSource,
{
    loop {
        if session.needs_render() {
            terminal
                .draw(|frame| draw_player(frame, session, theme))
                .context("Failed to draw frame")?;
            session.mark_rendered();
        }

        let timeout = session.poll_timeout(Instant::now());
        if let Some(event) = events.next_event(timeout).context("Failed to read input")? {
            if let Some(command) = handle_event(event, session.show_help()) {
                if session.apply(command, Instant::now())? == InputResult::Quit {
                    return Ok(PlaybackResult::Interrupted);
                }
            }
        }

        if session.advance(Instant::now())? == Flow::Finished {
            return Ok(PlaybackResult::Finished(session.frames_read()));
        }
    }
}
