//! Integration tests for the player session and loop, run headless

use std::collections::VecDeque;
use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use super::helpers::fixtures_dir;
use pedview::player::input::Command;
use pedview::player::render::draw_player;
use pedview::player::{
    run, CoordinateMapper, EventSource, PlaybackResult, Session, Surface,
};
use pedview::theme::{Origin, Theme};
use pedview::{Config, FrameSource};

/// Replays a fixed list of events, then reports no input.
struct Scripted(VecDeque<Event>);

impl Scripted {
    fn keys(codes: &[KeyCode]) -> Self {
        Self(
            codes
                .iter()
                .map(|c| Event::Key(KeyEvent::new(*c, KeyModifiers::NONE)))
                .collect(),
        )
    }
}

impl EventSource for Scripted {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        match self.0.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                std::thread::sleep(timeout.min(Duration::from_millis(5)));
                Ok(None)
            }
        }
    }
}

fn corridor_session(speed: f64) -> Session<File> {
    let mut config = Config::default();
    config.playback.speed = speed;
    let source = FrameSource::open(fixtures_dir().join("corridor.csv")).unwrap();
    Session::open(source, &config, Theme::dark().agents, Instant::now()).unwrap()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn plays_to_the_end_without_input() {
    let mut session = corridor_session(16.0);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    let result = run(
        &mut terminal,
        &mut session,
        &Theme::dark(),
        &mut Scripted::keys(&[]),
    )
    .unwrap();

    assert_eq!(result, PlaybackResult::Finished(5));
}

#[test]
fn quit_key_interrupts() {
    let mut session = corridor_session(1.0);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    let result = run(
        &mut terminal,
        &mut session,
        &Theme::dark(),
        &mut Scripted::keys(&[KeyCode::Char('q')]),
    )
    .unwrap();

    assert_eq!(result, PlaybackResult::Interrupted);
}

#[test]
fn first_draw_shows_initial_timestamp() {
    let mut session = corridor_session(1.0);
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|f| draw_player(f, &mut session, &Theme::dark()))
        .unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("t = 0.00 s"));
    assert!(text.contains("agents:3/3"));
}

#[test]
fn paused_stepping_moves_one_frame_at_a_time() {
    let now = Instant::now();
    let mut session = corridor_session(1.0);
    session.apply(Command::TogglePause, now).unwrap();
    session.apply(Command::StepForward, now).unwrap();
    session.apply(Command::StepForward, now).unwrap();
    assert_eq!(session.index(), 2);

    // Paused: time passing does not move the frame
    session.advance(now + Duration::from_secs(5)).unwrap();
    assert_eq!(session.index(), 2);

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|f| draw_player(f, &mut session, &Theme::dark()))
        .unwrap();
    assert!(screen_text(&terminal).contains("t = 0.20 s"));

    session.apply(Command::StepBackward, now).unwrap();
    assert_eq!(session.index(), 1);
}

#[test]
fn agent_entering_from_outside_keeps_first_color() {
    let now = Instant::now();
    let mut session = corridor_session(1.0);
    let mapper = CoordinateMapper::new(*session.domain(), Surface::from_cells(80, 18, 4));

    session.apply(Command::TogglePause, now).unwrap();
    for _ in 0..3 {
        session.apply(Command::StepForward, now).unwrap();
    }

    // Frame 3: agent 4 sits at x = 16.4, past the corridor end
    let scene = session.scene(&mapper).unwrap();
    assert_eq!(scene.hidden, 1);
    assert!(scene.agents.iter().all(|a| a.id.as_str() != "4"));
    assert_eq!(session.colors().assigned("4"), Some(Origin::Right));

    // Frame 4: agent 4 is inside and drawn with the remembered color
    session.apply(Command::StepForward, now).unwrap();
    let scene = session.scene(&mapper).unwrap();
    let agent = scene
        .agents
        .iter()
        .find(|a| a.id.as_str() == "4")
        .expect("agent 4 visible");
    assert_eq!(agent.color, Theme::dark().agents.right_origin);
}

#[test]
fn help_overlay_closes_on_any_key() {
    let mut session = corridor_session(1.0);
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    let now = Instant::now();

    session.apply(Command::ToggleHelp, now).unwrap();
    terminal
        .draw(|f| draw_player(f, &mut session, &Theme::dark()))
        .unwrap();
    assert!(screen_text(&terminal).contains("Press any key to close"));

    session.apply(Command::ToggleHelp, now).unwrap();
    assert!(!session.show_help());
}

#[test]
fn speed_controls_are_bounded() {
    let now = Instant::now();
    let mut session = corridor_session(1.0);
    for _ in 0..20 {
        session.apply(Command::SpeedUp, now).unwrap();
    }
    assert_eq!(session.clock().speed(), 16.0);

    for _ in 0..40 {
        session.apply(Command::SpeedDown, now).unwrap();
    }
    assert!((session.clock().speed() - 0.1).abs() < 1e-9);
}
