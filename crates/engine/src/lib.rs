//! Ascent engine library.
//!
//! Application layer around the progression domain:
//!
//! - `ports/` - Seams to the host game (clock, storage, event bus)
//! - `adapters/` - Concrete port implementations shipped with the SDK
//! - `use_cases/` - Level lifecycle orchestration
//! - `codec` - JSON payloads with `className` variant dispatch

pub mod adapters;
pub mod codec;
pub mod ports;
pub mod use_cases;

/// End-to-end lifecycle tests against the real in-memory adapter.
#[cfg(test)]
mod lifecycle_tests;

pub use adapters::InMemoryLevelStorage;
pub use codec::{CodecError, LevelFactory};
pub use ports::{ClockPort, EventBus, LevelStorage, NullEventBus, SystemClock};
pub use use_cases::level::{
    EndLevel, LevelStats, LevelUseCases, PauseLevel, PlayDuration, RestartLevel, StartLevel,
};
