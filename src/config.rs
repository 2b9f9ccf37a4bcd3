//! Player configuration.
//!
//! Loaded from `<config dir>/pedview/config.toml` (or `--config`). Every
//! field has a default, so a missing file or a partial file is fine.
//! Command-line arguments override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::mapper::Domain;

/// Smallest usable history ring: the current frame plus one to step back to.
pub const MIN_HISTORY_CAPACITY: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub domain: DomainConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Speed multiplier, 1.0 = real time
    pub speed: f64,
    /// Frames kept for stepping backwards
    pub history_capacity: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            history_capacity: 512,
        }
    }
}

/// Physical corridor geometry, in the simulator's units (meters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub length: f64,
    pub width: f64,
    /// Largest agent radius the simulator produces
    pub r_max: f64,
    /// Radius of the core disc drawn inside each agent
    pub r_min: f64,
    /// Keep drawn circles inside the lane walls
    pub lane_clamp: bool,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            length: 16.0,
            width: 3.6,
            r_max: 0.35,
            r_min: 0.10,
            lane_clamp: true,
        }
    }
}

impl DomainConfig {
    pub fn to_domain(&self) -> Domain {
        Domain {
            length: self.length,
            width: self.width,
            r_max: self.r_max,
            lane_clamp: self.lane_clamp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub theme: ThemeName,
    /// Draw a velocity arrow on every agent
    pub direction_vectors: bool,
    /// Blank margin around the corridor, in canvas dots
    pub padding: u16,
    /// Arrow length per unit speed, as a fraction of the map scale
    pub arrow_scale: f64,
    /// Draw the darker core disc of radius `r_min`
    pub draw_cores: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            direction_vectors: false,
            padding: 4,
            arrow_scale: 0.7,
            draw_cores: true,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("pedview").join("config.toml"))
    }

    /// Load the config from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the player cannot work with.
    ///
    /// The speed is not checked here: it is validated by the playback
    /// clock so the same error surfaces whether it came from a file or
    /// the command line.
    pub fn validate(&self) -> Result<()> {
        let domain = &self.domain;
        if !(domain.length > 0.0 && domain.length.is_finite()) {
            bail!("domain.length must be positive, got {}", domain.length);
        }
        if !(domain.width > 0.0 && domain.width.is_finite()) {
            bail!("domain.width must be positive, got {}", domain.width);
        }
        if domain.r_max < 0.0 || domain.r_min < 0.0 {
            bail!("domain radii must not be negative");
        }
        if self.playback.history_capacity < MIN_HISTORY_CAPACITY {
            bail!(
                "playback.history_capacity must be at least {}, got {}",
                MIN_HISTORY_CAPACITY,
                self.playback.history_capacity
            );
        }
        if !(self.render.arrow_scale >= 0.0) {
            bail!("render.arrow_scale must not be negative");
        }
        Ok(())
    }

    /// Render the config as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
