//! Ascent domain layer.
//!
//! Pure progression model: no I/O, no clock reads, no storage. Wall-clock
//! time enters as millisecond parameters and persistence side effects are
//! reported through outcome types, both supplied by the engine layer.

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use entities::{Gate, GateCondition, Level, LevelState, Mission, Score, World};
pub use error::DomainError;
pub use events::{EndOutcome, ProgressEvent, ScoreUpdate, StartOutcome};
pub use ids::{GateId, MissionId, ScoreId, WorldId};
pub use value_objects::LevelKey;
