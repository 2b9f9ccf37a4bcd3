//! Playback logic for the native player.
//!
//! This module handles frame retention and random access over the
//! forward-only record stream.

mod history;
mod timeline;

pub use history::FrameHistory;
pub use timeline::Timeline;
