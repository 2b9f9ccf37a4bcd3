//! Command-line interface definition.
//!
//! Lives in the library so the xtask crate can render the man page from
//! the same definition.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::Parser;

use crate::config::{Config, ThemeName};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pedview",
    version,
    about = "Replay pedestrian corridor simulation records in the terminal",
    long_about = "Replay pedestrian corridor simulation records in the terminal.\n\n\
        The record file is CSV with a header line followed by\n\
        `time, id, x, y, vx, vy, radius[, goal_sign]` rows sorted by time.\n\n\
        Keys: space pause, left/right step, Home oldest frame, +/- speed,\n\
        v vectors, ? help, q quit."
)]
pub struct Cli {
    /// Record file to play
    #[arg(value_name = "RECORD_FILE")]
    pub file: Option<PathBuf>,

    /// Playback speed multiplier (1.0 = real time)
    #[arg(value_name = "SPEED", allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Draw velocity arrows (true/false)
    #[arg(value_name = "DIRECTION_VECTORS", value_parser = BoolishValueParser::new())]
    pub direction_vectors: Option<bool>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Frames kept for stepping backwards
    #[arg(long, value_name = "N")]
    pub history: Option<usize>,

    /// Corridor length
    #[arg(long, value_name = "L")]
    pub length: Option<f64>,

    /// Corridor width
    #[arg(long, value_name = "W")]
    pub width: Option<f64>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,

    /// Write diagnostics to this file (also PEDVIEW_LOG_FILE)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Overlay command-line values on a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(speed) = self.speed {
            config.playback.speed = speed;
        }
        if let Some(vectors) = self.direction_vectors {
            config.render.direction_vectors = vectors;
        }
        if let Some(history) = self.history {
            config.playback.history_capacity = history;
        }
        if let Some(length) = self.length {
            config.domain.length = length;
        }
        if let Some(width) = self.width {
            config.domain.width = width;
        }
        if let Some(theme) = self.theme {
            config.render.theme = theme;
        }
    }
}
