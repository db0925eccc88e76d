//! Domain Events
//!
//! Mutation-outcome types returned by aggregates, communicating what happened
//! when state was modified, plus the coarse-grained `ProgressEvent` published
//! to host games at the adapter boundary.

use serde::{Deserialize, Serialize};

use crate::value_objects::LevelKey;

/// Outcome of attempting to start a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The level transitioned to Running. `resumed` is true when play
    /// continued from a pause rather than beginning a fresh session; the
    /// times-started counter is only incremented for non-resumed starts.
    Started { resumed: bool },
    /// The level was already running; nothing changed.
    AlreadyRunning,
    /// The unlock gate is closed; nothing changed.
    Refused,
}

/// Outcome of attempting to end a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOutcome {
    /// The level transitioned to Ended (and on to Completed when the session
    /// finished successfully). `duration_ms` carries the final play duration
    /// for completed sessions only.
    Ended { duration_ms: Option<i64> },
    /// End was called without a matching start; nothing changed.
    NotStarted,
}

/// Outcome of resetting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpdate {
    Reset {
        /// Whether the pre-reset value was folded into the record.
        saved: bool,
        /// Whether that value beat the previous record.
        record_broken: bool,
    },
}

/// Domain event for significant progression changes.
///
/// Published through the engine's event bus so host games can react
/// (UI updates, analytics, unlock cascades) without polling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressEvent {
    LevelStarted {
        key: LevelKey,
        resumed: bool,
    },
    LevelPaused {
        key: LevelKey,
    },
    LevelEnded {
        key: LevelKey,
        completed: bool,
        duration_ms: Option<i64>,
    },
    LevelCompleted {
        key: LevelKey,
    },
}
