//! End-to-end level lifecycle tests.
//!
//! Run the full use-case stack against the real in-memory storage adapter,
//! with a hand-advanced clock and a collecting event bus.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use ascent_domain::{Level, LevelKey, LevelState, ProgressEvent, WorldId};
use chrono::{DateTime, TimeZone, Utc};

use crate::adapters::InMemoryLevelStorage;
use crate::ports::{ClockPort, EventBus, LevelStorage};
use crate::use_cases::level::LevelUseCases;

/// Clock advanced explicitly by the test.
struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    fn starting_at(millis: i64) -> Arc<Self> {
        Arc::new(Self {
            millis: AtomicI64::new(millis),
        })
    }

    fn advance_to(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.millis.load(Ordering::SeqCst))
            .single()
            .unwrap_or_default()
    }
}

/// Event bus that records everything published.
#[derive(Default)]
struct CollectingBus {
    events: Mutex<Vec<ProgressEvent>>,
}

impl CollectingBus {
    fn collected(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl EventBus for CollectingBus {
    fn publish(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

fn never(_: &WorldId) -> bool {
    false
}

struct Harness {
    clock: Arc<ManualClock>,
    storage: Arc<InMemoryLevelStorage>,
    bus: Arc<CollectingBus>,
    use_cases: LevelUseCases,
}

fn harness() -> Harness {
    let clock = ManualClock::starting_at(0);
    let storage = Arc::new(InMemoryLevelStorage::new());
    let bus = Arc::new(CollectingBus::default());
    let use_cases = LevelUseCases::new(clock.clone(), storage.clone(), bus.clone());
    Harness {
        clock,
        storage,
        bus,
        use_cases,
    }
}

#[test]
fn full_session_with_pause_and_resume() {
    let h = harness();
    let mut level = Level::new("level_1").unwrap();
    let key = LevelKey::from("main/level_1");

    // Start at t=1000, pause at t=1500, resume at t=2000, end at t=2300.
    h.clock.advance_to(1_000);
    assert!(h.use_cases.start.execute(&mut level, &key, &never));

    h.clock.advance_to(1_500);
    h.use_cases.pause.execute(&mut level, &key);
    assert_eq!(h.use_cases.duration.execute(&level), 500);

    h.clock.advance_to(2_000);
    assert!(h.use_cases.start.execute(&mut level, &key, &never));

    h.clock.advance_to(2_300);
    h.use_cases.end.execute(&mut level, &key, true);

    assert_eq!(level.state(), LevelState::Completed);
    assert_eq!(h.use_cases.stats.times_started(&key), 1);
    assert_eq!(h.use_cases.stats.times_played(&key), 1);
    assert_eq!(h.use_cases.stats.slowest_duration_millis(&key), 800);
    assert_eq!(h.use_cases.stats.fastest_duration_millis(&key), 800);

    let events = h.bus.collected();
    assert_eq!(events.len(), 5);
    assert_eq!(
        events[0],
        ProgressEvent::LevelStarted {
            key: key.clone(),
            resumed: false
        }
    );
    assert_eq!(events[1], ProgressEvent::LevelPaused { key: key.clone() });
    assert_eq!(
        events[2],
        ProgressEvent::LevelStarted {
            key: key.clone(),
            resumed: true
        }
    );
    assert_eq!(
        events[3],
        ProgressEvent::LevelEnded {
            key: key.clone(),
            completed: true,
            duration_ms: Some(800)
        }
    );
    assert_eq!(events[4], ProgressEvent::LevelCompleted { key });
}

#[test]
fn repeated_sessions_track_both_extrema() {
    let h = harness();
    let mut level = Level::new("level_1").unwrap();
    let key = LevelKey::from("level_1");

    // First run: 800ms.
    h.clock.advance_to(1_000);
    h.use_cases.start.execute(&mut level, &key, &never);
    h.clock.advance_to(1_800);
    h.use_cases.end.execute(&mut level, &key, true);

    // Second run: 2000ms, slower.
    h.clock.advance_to(10_000);
    h.use_cases.start.execute(&mut level, &key, &never);
    h.clock.advance_to(12_000);
    h.use_cases.end.execute(&mut level, &key, true);

    // Third run: 300ms, fastest yet.
    h.clock.advance_to(20_000);
    h.use_cases.start.execute(&mut level, &key, &never);
    h.clock.advance_to(20_300);
    h.use_cases.end.execute(&mut level, &key, true);

    assert_eq!(h.use_cases.stats.times_started(&key), 3);
    assert_eq!(h.use_cases.stats.times_played(&key), 3);
    assert_eq!(h.use_cases.stats.fastest_duration_millis(&key), 300);
    assert_eq!(h.use_cases.stats.slowest_duration_millis(&key), 2_000);
}

#[test]
fn end_without_start_leaves_statistics_untouched() {
    let h = harness();
    let mut level = Level::new("level_1").unwrap();
    let key = LevelKey::from("level_1");

    h.clock.advance_to(1_000);
    h.use_cases.end.execute(&mut level, &key, true);

    assert_eq!(level.state(), LevelState::Idle);
    assert_eq!(h.use_cases.stats.times_played(&key), 0);
    assert_eq!(h.storage.times_started(&key), 0);
    assert!(h.bus.collected().is_empty());
}

#[test]
fn restart_while_paused_resumes_because_end_refuses() {
    // Pause zeroes the resume point, so the end inside restart hits the
    // not-started guard and the subsequent start resumes the paused session.
    let h = harness();
    let mut level = Level::new("level_1").unwrap();
    let key = LevelKey::from("level_1");

    h.clock.advance_to(1_000);
    h.use_cases.start.execute(&mut level, &key, &never);
    h.clock.advance_to(1_500);
    h.use_cases.pause.execute(&mut level, &key);

    h.clock.advance_to(2_000);
    assert!(h.use_cases.restart.execute(&mut level, &key, true, &never));

    assert_eq!(level.state(), LevelState::Running);
    // Elapsed time survived: this was a resume, not a fresh session.
    h.clock.advance_to(2_300);
    assert_eq!(h.use_cases.duration.execute(&level), 800);
    assert_eq!(h.use_cases.stats.times_started(&key), 1);
    assert_eq!(h.use_cases.stats.times_played(&key), 0);
}

#[test]
fn restart_while_running_records_the_session_and_starts_fresh() {
    let h = harness();
    let mut level = Level::new("level_1").unwrap();
    let key = LevelKey::from("level_1");

    h.clock.advance_to(1_000);
    h.use_cases.start.execute(&mut level, &key, &never);

    h.clock.advance_to(2_000);
    assert!(h.use_cases.restart.execute(&mut level, &key, true, &never));

    assert_eq!(level.state(), LevelState::Running);
    assert_eq!(h.use_cases.stats.times_started(&key), 2);
    assert_eq!(h.use_cases.stats.times_played(&key), 1);
    assert_eq!(h.use_cases.stats.slowest_duration_millis(&key), 1_000);

    h.clock.advance_to(2_400);
    assert_eq!(h.use_cases.duration.execute(&level), 400);
}
