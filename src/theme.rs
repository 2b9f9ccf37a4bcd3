//! Theme configuration for the player and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the player) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeName;

/// Which side of the corridor an agent set out from.
///
/// Agents heading in +x started on the left, agents heading in -x (or
/// standing still) started on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Left,
    Right,
}

impl Origin {
    /// Classify a signed direction value (goal sign or x velocity).
    pub fn from_direction(direction: f64) -> Self {
        if direction > 0.0 {
            Origin::Left
        } else {
            Origin::Right
        }
    }
}

/// The two agent colors plus the darker core shade for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentPalette {
    pub left_origin: Color,
    pub right_origin: Color,
    pub left_core: Color,
    pub right_core: Color,
}

impl AgentPalette {
    pub fn body(&self, origin: Origin) -> Color {
        match origin {
            Origin::Left => self.left_origin,
            Origin::Right => self.right_origin,
        }
    }

    pub fn core(&self, origin: Origin) -> Color {
        match origin {
            Origin::Left => self.left_core,
            Origin::Right => self.right_core,
        }
    }
}

/// Theme configuration for the player.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background
    pub background: Color,
    /// Corridor outline
    pub wall: Color,
    /// Velocity arrows
    pub arrow: Color,
    /// Timestamp label on the canvas
    pub label: Color,
    /// Primary text color (status bar, help)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for key hints
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Agent colors
    pub agents: AgentPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark corridor on a near-black background.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(20, 20, 25),
            wall: Color::Rgb(180, 180, 185),
            arrow: Color::Rgb(90, 150, 255),
            label: Color::Rgb(180, 180, 185),
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::LightRed,
            agents: AgentPalette {
                left_origin: Color::Rgb(0x7f, 0xc9, 0x7f),
                right_origin: Color::Rgb(0xfd, 0xc0, 0x86),
                left_core: Color::Rgb(0x01, 0x85, 0x71),
                right_core: Color::Rgb(0xa6, 0x61, 0x1a),
            },
        }
    }

    /// Light background, matching printed figures.
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 245),
            wall: Color::Rgb(120, 120, 120),
            arrow: Color::Rgb(0, 102, 255),
            label: Color::Rgb(40, 40, 40),
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            agents: AgentPalette {
                left_origin: Color::Rgb(0x7f, 0xc9, 0x7f),
                right_origin: Color::Rgb(0xfd, 0xc0, 0x86),
                left_core: Color::Rgb(0x66, 0xc2, 0xa5),
                right_core: Color::Rgb(0xfc, 0x8d, 0x62),
            },
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Wrap text in color codes unless `NO_COLOR` is set.
fn paint(color: Color, text: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return text.to_string();
    }
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => return format!("\x1b[38;5;{}m", i),
    };
    code.to_string()
}
