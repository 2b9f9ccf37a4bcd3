//! Random access over a forward-only frame stream.
//!
//! Requests for frames not read yet pull from the [`FrameSource`]; requests
//! for earlier frames are served from the [`FrameHistory`] ring.

use std::io::Read;

use tracing::info;

use super::history::FrameHistory;
use crate::error::ReplayError;
use crate::records::{Frame, FrameSource};

pub struct Timeline<R: Read> {
    source: FrameSource<R>,
    history: FrameHistory,
    exhausted: bool,
}

impl<R: Read> Timeline<R> {
    pub fn new(source: FrameSource<R>, capacity: usize) -> Self {
        Self {
            source,
            history: FrameHistory::new(capacity),
            exhausted: false,
        }
    }

    /// Read enough of the stream to know the time step.
    ///
    /// Returns the first two timestamps. Fails with `EmptyStream` when the
    /// stream has no frames and `InsufficientFrames` when it has one.
    pub fn prime(&mut self) -> Result<[f64; 2], ReplayError> {
        self.fetch(1)?;
        match (self.history.get(0), self.history.get(1)) {
            (Some(first), Some(second)) => Ok([first.time(), second.time()]),
            _ => Err(ReplayError::InsufficientFrames {
                found: self.history.len(),
            }),
        }
    }

    /// Frame at an absolute index.
    ///
    /// Reads ahead from the source as needed. Returns `Ok(None)` when the
    /// index is past the end of the stream or already evicted from the
    /// history ring.
    pub fn fetch(&mut self, index: usize) -> Result<Option<&Frame>, ReplayError> {
        while !self.exhausted && self.history.newest_index().map_or(true, |newest| newest < index)
        {
            match self.source.next_frame()? {
                Some(frame) => {
                    self.history.push(frame);
                }
                None => {
                    self.exhausted = true;
                    info!(frames = self.source.frames_emitted(), "end of record stream");
                }
            }
        }
        Ok(self.history.get(index))
    }

    /// Frame at an index, without reading from the source.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.history.get(index)
    }

    /// Range of indices currently retained, as `(oldest, newest)`.
    pub fn window(&self) -> Option<(usize, usize)> {
        self.history.oldest_index().zip(self.history.newest_index())
    }

    /// Whether the source has been read to the end.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Total frames read so far.
    pub fn frames_read(&self) -> usize {
        self.source.frames_emitted()
    }

    pub fn history_capacity(&self) -> usize {
        self.history.capacity()
    }
}
