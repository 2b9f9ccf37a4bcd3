//! Help overlay rendering for the native player.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║        Pedestrian Replay Player Help      ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Pause / Resume              ║",
    "  ║    ->         Step one frame forward      ║",
    "  ║    <-         Step one frame back         ║",
    "  ║    Home       Go to oldest kept frame     ║",
    "  ║    +/-        Speed up / down             ║",
    "  ║                                           ║",
    "  ║  Display                                  ║",
    "  ║    v          Toggle velocity vectors     ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q / Esc    Quit player                 ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Area covered by the help box inside `area`, clipped to it.
pub fn help_area(area: Rect) -> Rect {
    let x = area.x + calc_help_start_col(area.width);
    let y = area.y + calc_help_start_row(area.height);
    Rect {
        x,
        y,
        width: (HELP_BOX_WIDTH as u16).min(area.width),
        height: (HELP_LINES.len() as u16).min(area.height),
    }
}

/// Render the help overlay on top of whatever was drawn in `area`.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let target = help_area(area);
    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::raw(*l)).collect();

    frame.render_widget(Clear, target);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Green)),
        target,
    );
}
