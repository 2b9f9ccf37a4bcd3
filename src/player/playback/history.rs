//! Bounded ring of recently parsed frames.
//!
//! The frame source only moves forward, so stepping backwards is served
//! from this ring. Frames are addressed by their absolute index in the
//! stream; once a frame falls out of the ring it is gone for the session.

use std::collections::VecDeque;

use crate::config::MIN_HISTORY_CAPACITY;
use crate::records::Frame;

#[derive(Debug)]
pub struct FrameHistory {
    frames: VecDeque<Frame>,
    capacity: usize,
    /// Absolute stream index of `frames[0]`
    first_index: usize,
}

impl FrameHistory {
    /// Create a ring holding at most `capacity` frames (at least 2).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_HISTORY_CAPACITY);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
            first_index: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append the next frame of the stream, evicting the oldest when full.
    ///
    /// Returns the absolute index assigned to the frame.
    pub fn push(&mut self, frame: Frame) -> usize {
        if self.frames.len() == self.capacity {
            self.frames.pop_front();
            self.first_index += 1;
        }
        self.frames.push_back(frame);
        self.first_index + self.frames.len() - 1
    }

    /// Frame at an absolute index, if it is still retained.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        index
            .checked_sub(self.first_index)
            .and_then(|offset| self.frames.get(offset))
    }

    /// Absolute index of the oldest retained frame.
    pub fn oldest_index(&self) -> Option<usize> {
        (!self.frames.is_empty()).then_some(self.first_index)
    }

    /// Absolute index of the newest retained frame.
    pub fn newest_index(&self) -> Option<usize> {
        (!self.frames.is_empty()).then(|| self.first_index + self.frames.len() - 1)
    }
}
