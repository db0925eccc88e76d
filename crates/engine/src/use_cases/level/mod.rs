//! Level lifecycle use cases.
//!
//! Each use case wires one level operation to the clock, storage, and event
//! bus ports. The state machine itself lives on the domain `Level`; this
//! layer injects wall-clock millis, performs the persisted-counter side
//! effects the domain reports as necessary, and publishes progress events.

use std::sync::Arc;

use ascent_domain::{
    EndOutcome, Level, LevelKey, LevelState, ProgressEvent, StartOutcome, WorldId,
};

use crate::ports::{ClockPort, EventBus, LevelStorage};

/// Container for level use cases.
pub struct LevelUseCases {
    pub start: Arc<StartLevel>,
    pub pause: Arc<PauseLevel>,
    pub end: Arc<EndLevel>,
    pub restart: Arc<RestartLevel>,
    pub duration: Arc<PlayDuration>,
    pub stats: Arc<LevelStats>,
}

impl LevelUseCases {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        storage: Arc<dyn LevelStorage>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        let start = Arc::new(StartLevel::new(
            clock.clone(),
            storage.clone(),
            events.clone(),
        ));
        let pause = Arc::new(PauseLevel::new(clock.clone(), events.clone()));
        let end = Arc::new(EndLevel::new(clock.clone(), storage.clone(), events));
        let restart = Arc::new(RestartLevel::new(start.clone(), end.clone()));
        let duration = Arc::new(PlayDuration::new(clock));
        let stats = Arc::new(LevelStats::new(storage));
        Self {
            start,
            pause,
            end,
            restart,
            duration,
            stats,
        }
    }
}

// =============================================================================
// Start
// =============================================================================

/// Starts (or resumes) play on a level.
pub struct StartLevel {
    clock: Arc<dyn ClockPort>,
    storage: Arc<dyn LevelStorage>,
    events: Arc<dyn EventBus>,
}

impl StartLevel {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        storage: Arc<dyn LevelStorage>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            clock,
            storage,
            events,
        }
    }

    /// Attempts to start the level.
    ///
    /// `world_completed` resolves other worlds' completion flags for gate
    /// evaluation. Returns false when the level is already running or its
    /// gate is closed; a fresh (non-resumed) start increments the persisted
    /// times-started counter exactly once.
    pub fn execute(
        &self,
        level: &mut Level,
        key: &LevelKey,
        world_completed: &dyn Fn(&WorldId) -> bool,
    ) -> bool {
        let now_ms = self.clock.now().timestamp_millis();
        let can_start = level.world().can_start(world_completed);
        match level.start(now_ms, can_start) {
            StartOutcome::Started { resumed } => {
                if !resumed {
                    self.storage.inc_times_started(key);
                }
                self.events.publish(ProgressEvent::LevelStarted {
                    key: key.clone(),
                    resumed,
                });
                true
            }
            StartOutcome::AlreadyRunning => {
                tracing::debug!(key = %key, "start ignored: level already running");
                false
            }
            StartOutcome::Refused => {
                tracing::debug!(key = %key, "start refused: gate is closed");
                false
            }
        }
    }
}

// =============================================================================
// Pause
// =============================================================================

/// Pauses a running level, banking its elapsed play time.
pub struct PauseLevel {
    clock: Arc<dyn ClockPort>,
    events: Arc<dyn EventBus>,
}

impl PauseLevel {
    pub fn new(clock: Arc<dyn ClockPort>, events: Arc<dyn EventBus>) -> Self {
        Self { clock, events }
    }

    /// Pauses the level. Silently ignored unless it is running.
    pub fn execute(&self, level: &mut Level, key: &LevelKey) {
        let was_running = level.state() == LevelState::Running;
        level.pause(self.clock.now().timestamp_millis());
        if was_running {
            self.events
                .publish(ProgressEvent::LevelPaused { key: key.clone() });
        }
    }
}

// =============================================================================
// End
// =============================================================================

/// Ends a play session, updating persisted statistics on completion.
pub struct EndLevel {
    clock: Arc<dyn ClockPort>,
    storage: Arc<dyn LevelStorage>,
    events: Arc<dyn EventBus>,
}

impl EndLevel {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        storage: Arc<dyn LevelStorage>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            clock,
            storage,
            events,
        }
    }

    /// Ends the session. A completed end records new duration extrema and
    /// bumps the times-played counter; an end with no matching start is a
    /// logged no-op.
    pub fn execute(&self, level: &mut Level, key: &LevelKey, completed: bool) {
        let now_ms = self.clock.now().timestamp_millis();
        match level.end(completed, now_ms) {
            EndOutcome::NotStarted => {
                tracing::error!(key = %key, "end called without a matching start");
            }
            EndOutcome::Ended { duration_ms } => {
                if let Some(duration) = duration_ms {
                    if duration > self.storage.slowest_duration_millis(key) {
                        self.storage.set_slowest_duration_millis(key, duration);
                    }
                    if duration < self.storage.fastest_duration_millis(key) {
                        self.storage.set_fastest_duration_millis(key, duration);
                    }
                    self.storage.inc_times_played(key);
                }
                self.events.publish(ProgressEvent::LevelEnded {
                    key: key.clone(),
                    completed,
                    duration_ms,
                });
                if completed {
                    self.events
                        .publish(ProgressEvent::LevelCompleted { key: key.clone() });
                }
            }
        }
    }
}

// =============================================================================
// Restart
// =============================================================================

/// Ends the current session (if one is active) and starts a fresh one.
pub struct RestartLevel {
    start: Arc<StartLevel>,
    end: Arc<EndLevel>,
}

impl RestartLevel {
    pub fn new(start: Arc<StartLevel>, end: Arc<EndLevel>) -> Self {
        Self { start, end }
    }

    /// Restarts the level. An active (running or paused) session is ended
    /// first, carrying the same `completed` flag into that end.
    pub fn execute(
        &self,
        level: &mut Level,
        key: &LevelKey,
        completed: bool,
        world_completed: &dyn Fn(&WorldId) -> bool,
    ) -> bool {
        if matches!(level.state(), LevelState::Running | LevelState::Paused) {
            self.end.execute(level, key, completed);
        }
        self.start.execute(level, key, world_completed)
    }
}

// =============================================================================
// Reads
// =============================================================================

/// Reads the total active play time of a level.
pub struct PlayDuration {
    clock: Arc<dyn ClockPort>,
}

impl PlayDuration {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub fn execute(&self, level: &Level) -> i64 {
        level.play_duration_millis(self.clock.now().timestamp_millis())
    }
}

/// Pass-through reads of the persisted per-level statistics.
pub struct LevelStats {
    storage: Arc<dyn LevelStorage>,
}

impl LevelStats {
    pub fn new(storage: Arc<dyn LevelStorage>) -> Self {
        Self { storage }
    }

    pub fn times_started(&self, key: &LevelKey) -> u32 {
        self.storage.times_started(key)
    }

    pub fn times_played(&self, key: &LevelKey) -> u32 {
        self.storage.times_played(key)
    }

    pub fn slowest_duration_millis(&self, key: &LevelKey) -> i64 {
        self.storage.slowest_duration_millis(key)
    }

    pub fn fastest_duration_millis(&self, key: &LevelKey) -> i64 {
        self.storage.fastest_duration_millis(key)
    }
}
