//! Record stream and playback errors.

use std::path::PathBuf;

/// Errors that can occur while opening or replaying a record stream.
///
/// Every variant is fatal: they point at bad input or a bad invocation,
/// never at a transient condition, so nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Record stream contains no frames")]
    EmptyStream,

    #[error("Need at least two frames to derive a time step, found {found}")]
    InsufficientFrames { found: usize },

    #[error("Malformed record on line {line}: {reason} (`{raw}`)")]
    MalformedRecord {
        line: u64,
        raw: String,
        reason: String,
    },

    #[error("Speed must be a positive number, got {0}")]
    InvalidSpeed(f64),

    #[error("Frame timestamps {t0} and {t1} do not give a positive time step")]
    InvalidStep { t0: f64, t1: f64 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read record stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read record stream: {0}")]
    Csv(#[from] csv::Error),
}

impl ReplayError {
    /// Line number of the offending record, for errors that have one.
    pub fn line(&self) -> Option<u64> {
        match self {
            ReplayError::MalformedRecord { line, .. } => Some(*line),
            ReplayError::Csv(err) => err.position().map(|pos| pos.line()),
            _ => None,
        }
    }
}
