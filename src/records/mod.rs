//! Agent records and simulation frames.
//!
//! The simulator writes one line per agent per output step:
//!
//! ```text
//! time,id,x,y,vx,vy,radius[,goal_sign]
//! ```
//!
//! [`FrameSource`] turns that flat stream into [`Frame`]s, one per distinct
//! timestamp, without reading the whole file up front.

mod source;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

pub use source::FrameSource;

/// Stable identity of one agent across frames.
///
/// The simulator may write integers or arbitrary strings; both are kept
/// verbatim so `"007"` and `"7"` stay distinct agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AgentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for AgentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One agent's state at one simulation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: AgentId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    /// Intended travel direction, when the simulator writes one
    pub goal_sign: Option<i32>,
}

impl Record {
    /// Signed value whose sign gives the agent's travel direction.
    ///
    /// The goal sign wins when present; the x velocity is the fallback.
    pub fn direction_hint(&self) -> f64 {
        match self.goal_sign {
            Some(sign) => f64::from(sign),
            None => self.vx,
        }
    }

    /// Speed magnitude in physical units per second.
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

/// All records sharing one simulation timestamp, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    time: f64,
    records: Vec<Record>,
    by_id: HashMap<AgentId, usize>,
}

impl Frame {
    pub fn new(time: f64) -> Self {
        Self {
            time,
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Simulation timestamp in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Add a record to the frame.
    ///
    /// A second record for an identity already in the frame replaces the
    /// first one in place and the replaced record is returned.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        match self.by_id.get(&record.id) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.by_id.insert(record.id.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in arrival order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &AgentId> {
        self.records.iter().map(|record| &record.id)
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
