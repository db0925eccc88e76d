//! Score entity - A resettable point tracker attached to a level.

use serde::{Deserialize, Serialize};

use crate::events::ScoreUpdate;
use crate::ids::ScoreId;

/// A point or metric tracker.
///
/// The live value is session state and is never serialized; a fresh or
/// deserialized score always reads `start_value` until mutated. The record
/// survives in the definition so hosts can display personal bests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    id: ScoreId,
    name: String,
    #[serde(default)]
    start_value: f64,
    /// When false, lower values beat the record (e.g. lap times).
    #[serde(default = "default_higher_is_better")]
    higher_is_better: bool,
    #[serde(default)]
    record: Option<f64>,
    #[serde(skip)]
    value: Option<f64>,
}

fn default_higher_is_better() -> bool {
    true
}

impl Score {
    pub fn new(id: impl Into<ScoreId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_value: 0.0,
            higher_is_better: true,
            record: None,
            value: None,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &ScoreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn higher_is_better(&self) -> bool {
        self.higher_is_better
    }

    pub fn record(&self) -> Option<f64> {
        self.record
    }

    /// Current session value; reads as `start_value` until mutated.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(self.start_value)
    }

    // === Builder Methods ===

    pub fn with_start_value(mut self, start_value: f64) -> Self {
        self.start_value = start_value;
        self
    }

    pub fn with_higher_is_better(mut self, higher_is_better: bool) -> Self {
        self.higher_is_better = higher_is_better;
        self
    }

    // === Mutations ===

    pub fn set(&mut self, value: f64) {
        self.value = Some(value);
    }

    pub fn inc(&mut self, amount: f64) {
        self.set(self.value() + amount);
    }

    pub fn dec(&mut self, amount: f64) {
        self.set(self.value() - amount);
    }

    /// Whether the current value beats the stored record.
    pub fn has_beaten_record(&self) -> bool {
        match self.record {
            Some(record) => self.beats(self.value(), record),
            None => true,
        }
    }

    /// Restores the value to `start_value`. When `save` is set, the pre-reset
    /// value is first folded into the record (a completed level resets its
    /// scores this way; an abandoned one resets without saving).
    pub fn reset(&mut self, save: bool) -> ScoreUpdate {
        let record_broken = if save {
            let broken = self.has_beaten_record();
            if broken {
                self.record = Some(self.value());
            }
            broken
        } else {
            false
        };
        self.value = None;
        ScoreUpdate::Reset {
            saved: save,
            record_broken,
        }
    }

    fn beats(&self, candidate: f64, record: f64) -> bool {
        if self.higher_is_better {
            candidate > record
        } else {
            candidate < record
        }
    }
}
