//! pedview - terminal replay player for pedestrian corridor simulations
//!
//! Reads a time-ordered record file of agent states, groups it into frames
//! and plays them back at a constant wall-clock rate, drawing each agent as
//! a colored disc in a bounded corridor.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;
pub mod records;
pub mod theme;

pub use config::Config;
pub use error::ReplayError;
pub use records::{AgentId, Frame, FrameSource, Record};
