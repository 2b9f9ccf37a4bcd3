//! Rendering components for the native player.
//!
//! This module contains the UI rendering for the player: the corridor
//! canvas, status bar and help overlay.

mod canvas;
mod help;
mod scene;
mod status;

pub use canvas::{render_scene, Disc};
pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use scene::{build_scene, AgentGlyph, Arrow, Scene, SceneStyle};
pub use status::{format_sim_time, render_separator_line, render_status_bar, status_line, StatusInfo};

use std::io::Read;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::player::mapper::{CoordinateMapper, Surface};
use crate::player::session::Session;
use crate::theme::Theme;

/// Draw one complete player frame: canvas, separator, status bar and,
/// when open, the help overlay.
///
/// The mapper is rebuilt from the canvas area on every call, so a resize
/// takes effect on the next draw.
pub fn draw_player<R: Read>(frame: &mut Frame, session: &mut Session<R>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let canvas_area = chunks[0];
    let surface = Surface::from_cells(canvas_area.width, canvas_area.height, session.padding());
    let mapper = CoordinateMapper::new(*session.domain(), surface);

    let scene = session.scene(&mapper);
    if let Some(scene) = &scene {
        render_scene(frame, canvas_area, scene, theme);
    }

    render_separator_line(frame, chunks[1]);
    render_status_bar(frame, chunks[2], &session.status(scene.as_ref()), theme);

    if session.show_help() {
        render_help(frame, frame.area());
    }
}
