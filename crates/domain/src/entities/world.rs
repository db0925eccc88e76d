//! World entity - A node in the progression tree.
//!
//! A world may contain inner worlds, scores, and missions, and may be gated
//! by an unlock condition. Levels are worlds with play-session tracking on
//! top (see `level.rs`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Gate, Mission, Score};
use crate::error::DomainError;
use crate::ids::{ScoreId, WorldId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct World {
    id: WorldId,
    #[serde(default)]
    gate: Option<Gate>,
    #[serde(default)]
    inner_worlds: Vec<World>,
    #[serde(default)]
    scores: BTreeMap<ScoreId, Score>,
    #[serde(default)]
    missions: Vec<Mission>,
    #[serde(default)]
    completed: bool,
}

impl World {
    pub fn new(id: impl Into<WorldId>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::validation("world id cannot be empty"));
        }
        Ok(Self {
            id,
            gate: None,
            inner_worlds: Vec::new(),
            scores: BTreeMap::new(),
            missions: Vec::new(),
            completed: false,
        })
    }

    // === Accessors ===

    pub fn id(&self) -> &WorldId {
        &self.id
    }

    pub fn gate(&self) -> Option<&Gate> {
        self.gate.as_ref()
    }

    pub fn gate_mut(&mut self) -> Option<&mut Gate> {
        self.gate.as_mut()
    }

    pub fn inner_worlds(&self) -> &[World] {
        &self.inner_worlds
    }

    pub fn scores(&self) -> &BTreeMap<ScoreId, Score> {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut BTreeMap<ScoreId, Score> {
        &mut self.scores
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn missions_mut(&mut self) -> &mut [Mission] {
        &mut self.missions
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    // === Builder Methods ===

    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_inner_world(mut self, world: World) -> Self {
        self.inner_worlds.push(world);
        self
    }

    pub fn with_score(mut self, score: Score) -> Self {
        self.scores.insert(score.id().clone(), score);
        self
    }

    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.missions.push(mission);
        self
    }

    // === Mutations ===

    /// Whether this world's gate allows it to be started.
    /// `world_completed` resolves the completion flag of other worlds.
    pub fn can_start(&self, world_completed: &dyn Fn(&WorldId) -> bool) -> bool {
        self.gate
            .as_ref()
            .map_or(true, |gate| gate.is_open(world_completed))
    }

    /// Sets the completed flag. Unlock cascades over dependent worlds are the
    /// aggregate owner's concern, driven off the published progress events.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GateCondition;

    #[test]
    fn rejects_empty_id() {
        let result = World::new("");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn ungated_world_can_start() {
        let world = World::new("main").unwrap();
        assert!(world.can_start(&|_| false));
    }

    #[test]
    fn gated_world_waits_for_its_gate() {
        let world = World::new("main")
            .unwrap()
            .with_gate(Gate::new("g1", GateCondition::Manual { open: false }));
        assert!(!world.can_start(&|_| false));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let world = World::new("main")
            .unwrap()
            .with_inner_world(World::new("forest").unwrap());

        let json = serde_json::to_value(&world).unwrap();
        assert_eq!(json["id"], "main");
        assert_eq!(json["innerWorlds"][0]["id"], "forest");
        assert_eq!(json["completed"], false);
    }
}
