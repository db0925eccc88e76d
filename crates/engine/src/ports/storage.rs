//! Storage port for persisted level statistics.

use ascent_domain::LevelKey;

/// Persisted per-level counters and duration extrema, keyed by the level's
/// composite path. Values survive process restarts.
///
/// Sentinel contract for levels never completed: `slowest_duration_millis`
/// reads 0 and `fastest_duration_millis` reads `i64::MAX`, so the strict
/// comparisons on a completed end adopt the first run for both extrema.
///
/// Calls are infallible at this layer; backends handle their own failures
/// (retry, log, degrade) rather than surfacing them into level bookkeeping.
#[cfg_attr(test, mockall::automock)]
pub trait LevelStorage: Send + Sync {
    fn times_started(&self, key: &LevelKey) -> u32;

    /// Increments and returns the new count.
    fn inc_times_started(&self, key: &LevelKey) -> u32;

    fn times_played(&self, key: &LevelKey) -> u32;

    /// Increments and returns the new count.
    fn inc_times_played(&self, key: &LevelKey) -> u32;

    fn slowest_duration_millis(&self, key: &LevelKey) -> i64;

    fn set_slowest_duration_millis(&self, key: &LevelKey, duration_ms: i64);

    fn fastest_duration_millis(&self, key: &LevelKey) -> i64;

    fn set_fastest_duration_millis(&self, key: &LevelKey, duration_ms: i64);
}
