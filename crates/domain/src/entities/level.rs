//! Level entity - A world with play-session tracking.
//!
//! Tracks the session state machine (Idle/Running/Paused/Ended/Completed)
//! and the active play timer. Time is injected as epoch milliseconds so the
//! state machine stays deterministic; persisted counters (times started,
//! times played, duration extrema) are owned by the engine's storage port
//! and driven off the outcomes returned here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::World;
use crate::error::DomainError;
use crate::events::{EndOutcome, StartOutcome};
use crate::ids::WorldId;

/// Play-session state of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelState {
    #[default]
    Idle,
    Running,
    Paused,
    Ended,
    Completed,
}

impl fmt::Display for LevelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LevelState::Idle => "idle",
            LevelState::Running => "running",
            LevelState::Paused => "paused",
            LevelState::Ended => "ended",
            LevelState::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for LevelState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "running" => Ok(Self::Running),
            "paused" => Ok(Self::Paused),
            "ended" => Ok(Self::Ended),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::parse(format!("unknown level state: {s}"))),
        }
    }
}

/// A playable level in the progression tree.
///
/// Timer fields are session state and are never serialized: a deserialized
/// level always comes back Idle with a zeroed timer, whatever state it was
/// saved in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    #[serde(flatten)]
    world: World,
    #[serde(skip)]
    state: LevelState,
    /// Epoch millis of the most recent resume point; 0 when not running.
    #[serde(skip)]
    start_ms: i64,
    /// Accumulated active play time in millis.
    #[serde(skip)]
    elapsed_ms: i64,
}

impl Level {
    pub fn new(id: impl Into<WorldId>) -> Result<Self, DomainError> {
        Ok(Self::from_world(World::new(id)?))
    }

    /// Wraps an already-built world (e.g. one carrying a gate, scores, and
    /// missions) into a fresh, idle level.
    pub fn from_world(world: World) -> Self {
        Self {
            world,
            state: LevelState::Idle,
            start_ms: 0,
            elapsed_ms: 0,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &WorldId {
        self.world.id()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn state(&self) -> LevelState {
        self.state
    }

    pub fn completed(&self) -> bool {
        self.world.completed()
    }

    // === Session state machine ===

    /// Attempts to start (or resume) play at `now_ms`.
    ///
    /// `can_start` is the evaluated unlock gate (see `World::can_start`).
    /// Starting from any state except Paused is a fresh session: the elapsed
    /// timer is reset and the caller increments the persisted times-started
    /// counter. Resuming from Paused keeps the accumulated time.
    pub fn start(&mut self, now_ms: i64, can_start: bool) -> StartOutcome {
        if self.state == LevelState::Running {
            return StartOutcome::AlreadyRunning;
        }
        if !can_start {
            return StartOutcome::Refused;
        }

        let resumed = self.state == LevelState::Paused;
        if !resumed {
            self.elapsed_ms = 0;
        }
        self.start_ms = now_ms;
        self.state = LevelState::Running;
        StartOutcome::Started { resumed }
    }

    /// Pauses play, folding the running stretch into the elapsed timer.
    /// Silently ignored unless the level is running.
    pub fn pause(&mut self, now_ms: i64) {
        if self.state != LevelState::Running {
            return;
        }
        self.elapsed_ms += now_ms - self.start_ms;
        self.start_ms = 0;
        self.state = LevelState::Paused;
    }

    /// Total active play time: the accumulated timer plus the current
    /// running stretch, if any. Pure read, callable at any time.
    pub fn play_duration_millis(&self, now_ms: i64) -> i64 {
        if self.start_ms != 0 {
            self.elapsed_ms + (now_ms - self.start_ms)
        } else {
            self.elapsed_ms
        }
    }

    /// Ends the session.
    ///
    /// Returns `NotStarted` without touching anything when there is no
    /// running stretch to end (`start_ms == 0`). Pause zeroes `start_ms`,
    /// so ending a paused level also lands on the guard; resume first.
    /// Kept intentionally to match the original SDK behavior.
    ///
    /// A completed end resets every owned score (saving records), zeroes the
    /// timer, and marks the level Completed; the returned duration is what
    /// the caller compares against the persisted extrema.
    pub fn end(&mut self, completed: bool, now_ms: i64) -> EndOutcome {
        if self.start_ms == 0 {
            return EndOutcome::NotStarted;
        }

        self.state = LevelState::Ended;
        if !completed {
            return EndOutcome::Ended { duration_ms: None };
        }

        let duration_ms = self.play_duration_millis(now_ms);
        for score in self.world.scores_mut().values_mut() {
            score.reset(true);
        }
        self.start_ms = 0;
        self.elapsed_ms = 0;
        self.set_completed(true);
        EndOutcome::Ended {
            duration_ms: Some(duration_ms),
        }
    }

    /// Marks the level completed (or un-completed), updating both the state
    /// field and the world's completed flag.
    pub fn set_completed(&mut self, completed: bool) {
        if completed {
            self.state = LevelState::Completed;
        } else if self.state == LevelState::Completed {
            self.state = LevelState::Ended;
        }
        self.world.set_completed(completed);
    }
}
