//! Ports - the engine's seams to the outside world.
//!
//! All ports are synchronous: every level operation is a plain field
//! mutation plus a collaborator call, executed on the caller's thread
//! (typically the game's update loop).

pub mod events;
pub mod storage;

pub use events::{EventBus, NullEventBus};
pub use storage::LevelStorage;

#[cfg(test)]
pub use events::MockEventBus;
#[cfg(test)]
pub use storage::MockLevelStorage;

use chrono::{DateTime, Utc};

/// Injectable wall-clock, for deterministic tests.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
