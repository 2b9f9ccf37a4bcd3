//! Native pedestrian replay player
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState struct and shared types (Mode, InputResult)
//! - `clock`: wall-clock pacing with chained deadlines
//! - `playback/`: frame history ring and random access over the stream
//! - `mapper`: physical corridor to canvas coordinates
//! - `color`: per-agent color memory
//! - `input/`: keyboard input to commands
//! - `render/`: corridor canvas, status bar and help overlay
//! - `session`: everything above tied together for one file
//! - `native`: the terminal loop
//!
//! # Usage
//!
//! ```no_run
//! use pedview::player::{play_file, PlaybackResult};
//! use pedview::Config;
//! use std::path::Path;
//!
//! let result = play_file(Path::new("corridor.csv"), &Config::default()).unwrap();
//! match result {
//!     PlaybackResult::Finished(frames) => println!("Played {} frames", frames),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub mod clock;
pub mod color;
pub mod input;
pub mod mapper;
mod native;
pub mod playback;
pub mod render;
pub mod session;
pub mod state;

pub use clock::PlaybackClock;
pub use color::AgentColorPolicy;
pub use mapper::{CoordinateMapper, Domain, Surface};
pub use native::{play_file, run, EventSource, PlaybackResult, TerminalEvents};
pub use session::{Flow, Session};
pub use state::{InputResult, Mode, PlaybackState};
