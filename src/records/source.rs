//! Streaming frame parser.
//!
//! Reads records one line at a time and groups consecutive lines that share
//! a timestamp into a [`Frame`]. Only the frame under construction is held
//! in memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, error, warn};

use super::{AgentId, Frame, Record};
use crate::error::ReplayError;

/// Minimum number of fields per record (`time,id,x,y,vx,vy,radius`).
const REQUIRED_FIELDS: usize = 7;
/// Field count when the optional `goal_sign` column is present.
const MAX_FIELDS: usize = 8;

/// Lazily parses a record stream into ordered frames.
///
/// The stream must be sorted by non-decreasing timestamp. That is a
/// precondition, not something this type repairs: sorting would require
/// reading the whole stream first.
pub struct FrameSource<R: Read> {
    reader: csv::Reader<R>,
    row: csv::StringRecord,
    pending: Option<Frame>,
    emitted: usize,
    finished: bool,
}

impl FrameSource<File> {
    /// Open a record file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReplayError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "opening record stream");
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<R: Read> FrameSource<R> {
    /// Wrap any reader. The first line is treated as a header and skipped.
    pub fn from_reader(input: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        Self {
            reader,
            row: csv::StringRecord::new(),
            pending: None,
            emitted: 0,
            finished: false,
        }
    }

    /// Number of frames handed out so far.
    pub fn frames_emitted(&self) -> usize {
        self.emitted
    }

    /// Whether the stream has ended, normally or by error.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Read the next complete frame.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A stream that never
    /// produced a frame fails with [`ReplayError::EmptyStream`] instead. A
    /// malformed line aborts the stream: the partially built frame is
    /// dropped and every later call returns `Ok(None)`.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, ReplayError> {
        if self.finished {
            return Ok(None);
        }

        loop {
            match self.reader.read_record(&mut self.row) {
                Ok(true) => {
                    let line = self.row.position().map_or(0, |pos| pos.line());
                    let (time, record) = match parse_row(&self.row, line) {
                        Ok(parsed) => parsed,
                        Err(err) => {
                            error!(line, "aborting record stream: {err}");
                            self.abort();
                            return Err(err);
                        }
                    };

                    match self.pending.take() {
                        Some(mut frame) if frame.time() == time => {
                            if let Some(old) = frame.insert(record) {
                                warn!(line, id = %old.id, time, "duplicate agent in frame, keeping last");
                            }
                            self.pending = Some(frame);
                        }
                        Some(frame) => {
                            if time < frame.time() {
                                warn!(
                                    line,
                                    previous = frame.time(),
                                    time,
                                    "timestamp went backwards, stream is not sorted"
                                );
                            }
                            self.pending = Some(Self::start_frame(time, record));
                            self.emitted += 1;
                            return Ok(Some(frame));
                        }
                        None => self.pending = Some(Self::start_frame(time, record)),
                    }
                }
                Ok(false) => {
                    self.finished = true;
                    return match self.pending.take() {
                        Some(frame) => {
                            self.emitted += 1;
                            debug!(frames = self.emitted, "record stream exhausted");
                            Ok(Some(frame))
                        }
                        None if self.emitted == 0 => Err(ReplayError::EmptyStream),
                        None => Ok(None),
                    };
                }
                Err(err) => {
                    error!("aborting record stream: {err}");
                    self.abort();
                    return Err(ReplayError::Csv(err));
                }
            }
        }
    }

    fn start_frame(time: f64, record: Record) -> Frame {
        let mut frame = Frame::new(time);
        frame.insert(record);
        frame
    }

    fn abort(&mut self) {
        self.pending = None;
        self.finished = true;
    }
}

impl<R: Read> Iterator for FrameSource<R> {
    type Item = Result<Frame, ReplayError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_frame().transpose()
    }
}

/// Parse one CSV row into its timestamp and record.
fn parse_row(row: &csv::StringRecord, line: u64) -> Result<(f64, Record), ReplayError> {
    let malformed = |reason: String| ReplayError::MalformedRecord {
        line,
        raw: row.iter().collect::<Vec<_>>().join(","),
        reason,
    };

    if row.len() < REQUIRED_FIELDS || row.len() > MAX_FIELDS {
        return Err(malformed(format!(
            "expected {} or {} fields, found {}",
            REQUIRED_FIELDS,
            MAX_FIELDS,
            row.len()
        )));
    }

    let number = |index: usize, name: &str| -> Result<f64, ReplayError> {
        let field = &row[index];
        match field.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(malformed(format!("{name} is not a finite number: {field:?}"))),
        }
    };

    let time = number(0, "time")?;
    let id = &row[1];
    if id.is_empty() {
        return Err(malformed("id is empty".to_string()));
    }

    let goal_sign = match row.get(7) {
        None | Some("") => None,
        Some(field) => Some(
            field
                .parse::<i32>()
                .map_err(|_| malformed(format!("goal_sign is not an integer: {field:?}")))?,
        ),
    };

    let record = Record {
        id: AgentId::from(id),
        x: number(2, "x")?,
        y: number(3, "y")?,
        vx: number(4, "vx")?,
        vy: number(5, "vy")?,
        radius: number(6, "radius")?,
        goal_sign,
    };

    Ok((time, record))
}
