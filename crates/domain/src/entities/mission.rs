//! Mission entity - An objective attached to a world or level.

use serde::{Deserialize, Serialize};

use crate::entities::Gate;
use crate::ids::{MissionId, WorldId};

/// An objective the player can complete, optionally gated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    id: MissionId,
    name: String,
    #[serde(default)]
    gate: Option<Gate>,
    #[serde(default)]
    completed: bool,
}

impl Mission {
    pub fn new(id: impl Into<MissionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gate: None,
            completed: false,
        }
    }

    pub fn id(&self) -> &MissionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gate(&self) -> Option<&Gate> {
        self.gate.as_ref()
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Whether the mission can currently be attempted.
    pub fn is_available(&self, world_completed: &dyn Fn(&WorldId) -> bool) -> bool {
        self.gate
            .as_ref()
            .map_or(true, |gate| gate.is_open(world_completed))
    }
}
