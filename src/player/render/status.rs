//! Status bar rendering for the native player.
//!
//! Displays playback state, frame position, speed and keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// Snapshot of everything the status bar shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInfo {
    pub paused: bool,
    pub index: usize,
    pub time: f64,
    pub speed: f64,
    pub visible: usize,
    pub total: usize,
    pub direction_vectors: bool,
    /// Playback reached the last frame while paused
    pub at_end: bool,
}

/// Format a simulation timestamp the way the canvas label does.
pub fn format_sim_time(seconds: f64) -> String {
    format!("t = {:.2} s", seconds)
}

/// Build the status line spans.
pub fn status_line(info: &StatusInfo, theme: &Theme) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let value = theme.text_style();
    let key = theme.accent_bold_style();

    // ▶ and ⏸ are double-width
    let state = if info.paused { "⏸  " } else { "▶  " };

    let mut spans = vec![
        Span::styled(" ", value),
        Span::styled(state, value),
        Span::styled(format_sim_time(info.time), value),
        Span::styled("  frame:", dim),
        Span::styled(format!("{} ", info.index), value),
        Span::styled("spd:", dim),
        Span::styled(format!("{:.1}x ", info.speed), value),
        Span::styled("agents:", dim),
        Span::styled(format!("{}/{} ", info.visible, info.total), value),
    ];

    if info.direction_vectors {
        spans.push(Span::styled("[V] ", Style::default().fg(Color::Magenta)));
    }
    if info.at_end {
        spans.push(Span::styled("[END] ", Style::default().fg(Color::Yellow)));
    }

    let play_action = if info.paused { ":play " } else { ":pause " };
    let hints: [(&'static str, &'static str); 6] = [
        ("space", play_action),
        ("←/→", ":step "),
        ("v", ":vec "),
        ("+/-", ":spd "),
        ("?", ":hlp "),
        ("q", ":quit"),
    ];
    spans.push(Span::styled("│ ", dim));
    for (k, action) in hints {
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(action, dim));
    }

    Line::from(spans)
}

/// Render the separator line above the status bar.
pub fn render_separator_line(frame: &mut Frame, area: Rect) {
    let line = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Render the status/controls bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, info: &StatusInfo, theme: &Theme) {
    frame.render_widget(Paragraph::new(status_line(info, theme)), area);
}
