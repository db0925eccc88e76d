//! Gate entity - Unlock conditions for worlds, levels, and missions.

use serde::{Deserialize, Serialize};

use crate::ids::{GateId, WorldId};

/// Condition that must hold before a gated node can be started.
///
/// Evaluation stays pure: conditions that depend on other worlds are checked
/// against a caller-supplied lookup rather than back-references into the tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GateCondition {
    /// Always open.
    Open,
    /// Opened and closed explicitly by the host game.
    Manual { open: bool },
    /// Open once the named world reports completed.
    WorldCompletion { world_id: WorldId },
}

/// An unlock gate attached to a world, level, or mission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    id: GateId,
    condition: GateCondition,
}

impl Gate {
    pub fn new(id: impl Into<GateId>, condition: GateCondition) -> Self {
        Self {
            id: id.into(),
            condition,
        }
    }

    /// Convenience constructor for a gate that is always open.
    pub fn open(id: impl Into<GateId>) -> Self {
        Self::new(id, GateCondition::Open)
    }

    pub fn id(&self) -> &GateId {
        &self.id
    }

    pub fn condition(&self) -> &GateCondition {
        &self.condition
    }

    /// Evaluates the gate. `world_completed` resolves the completion flag of
    /// other worlds in the tree.
    pub fn is_open(&self, world_completed: &dyn Fn(&WorldId) -> bool) -> bool {
        match &self.condition {
            GateCondition::Open => true,
            GateCondition::Manual { open } => *open,
            GateCondition::WorldCompletion { world_id } => world_completed(world_id),
        }
    }

    /// Toggles a manual gate. Returns false (and leaves the gate untouched)
    /// when the condition is not manual.
    pub fn set_open(&mut self, open: bool) -> bool {
        match &mut self.condition {
            GateCondition::Manual { open: current } => {
                *current = open;
                true
            }
            _ => false,
        }
    }
}
