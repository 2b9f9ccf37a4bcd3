//! Per-agent color assignment.
//!
//! An agent's color records where it set out from, not where it is heading
//! right now. It is fixed at first sighting, so an agent that turns around
//! keeps its original color and the reversal shows up as a mismatch between
//! color and motion.

use std::collections::HashMap;

use ratatui::style::Color;

use crate::records::{AgentId, Record};
use crate::theme::{AgentPalette, Origin};

/// Session-owned memory of which origin each agent was assigned.
#[derive(Debug, Clone)]
pub struct AgentColorPolicy {
    palette: AgentPalette,
    assigned: HashMap<AgentId, Origin>,
}

impl AgentColorPolicy {
    pub fn new(palette: AgentPalette) -> Self {
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// Origin of an agent, assigned from `initial_direction` on first call.
    ///
    /// Positive means the agent started on the left; zero or negative means
    /// it started on the right. Later calls ignore the direction argument.
    pub fn origin_for(&mut self, id: &AgentId, initial_direction: f64) -> Origin {
        if let Some(origin) = self.assigned.get(id) {
            return *origin;
        }
        let origin = Origin::from_direction(initial_direction);
        self.assigned.insert(id.clone(), origin);
        origin
    }

    /// Body color of an agent, assigned from its x velocity on first call.
    pub fn color_for(&mut self, id: &AgentId, initial_velocity_x: f64) -> Color {
        let origin = self.origin_for(id, initial_velocity_x);
        self.palette.body(origin)
    }

    /// Origin of the agent in a record.
    ///
    /// Uses the goal sign when the record has one and the x velocity
    /// otherwise.
    pub fn origin_for_record(&mut self, record: &Record) -> Origin {
        self.origin_for(&record.id, record.direction_hint())
    }

    /// Body color of the agent in a record.
    pub fn color_for_record(&mut self, record: &Record) -> Color {
        let origin = self.origin_for_record(record);
        self.palette.body(origin)
    }

    /// Previously assigned origin, without assigning one.
    pub fn assigned(&self, id: &str) -> Option<Origin> {
        self.assigned.get(id).copied()
    }

    pub fn palette(&self) -> &AgentPalette {
        &self.palette
    }

    /// Number of agents seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Forget every assignment (new file loaded).
    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}
