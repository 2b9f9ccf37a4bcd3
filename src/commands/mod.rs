//! Command handlers for the pedview binary

pub mod config;
pub mod play;
