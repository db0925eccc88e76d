//! In-memory level storage.
//!
//! Default non-persistent backend; also the storage used throughout the
//! test suite. Persistent backends implement the same `LevelStorage` port.

use std::collections::HashMap;
use std::sync::RwLock;

use ascent_domain::LevelKey;

use crate::ports::LevelStorage;

#[derive(Debug, Default, Clone, Copy)]
struct LevelRecord {
    times_started: u32,
    times_played: u32,
    slowest_ms: i64,
    /// None until the first completed run; reads as `i64::MAX`.
    fastest_ms: Option<i64>,
}

/// `LevelStorage` backed by a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryLevelStorage {
    records: RwLock<HashMap<LevelKey, LevelRecord>>,
}

impl InMemoryLevelStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, key: &LevelKey, f: impl Fn(&LevelRecord) -> T, unset: T) -> T {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records.get(key).map(f).unwrap_or(unset)
    }

    fn update<T>(&self, key: &LevelKey, f: impl Fn(&mut LevelRecord) -> T) -> T {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        f(records.entry(key.clone()).or_default())
    }
}

impl LevelStorage for InMemoryLevelStorage {
    fn times_started(&self, key: &LevelKey) -> u32 {
        self.read(key, |r| r.times_started, 0)
    }

    fn inc_times_started(&self, key: &LevelKey) -> u32 {
        self.update(key, |r| {
            r.times_started += 1;
            r.times_started
        })
    }

    fn times_played(&self, key: &LevelKey) -> u32 {
        self.read(key, |r| r.times_played, 0)
    }

    fn inc_times_played(&self, key: &LevelKey) -> u32 {
        self.update(key, |r| {
            r.times_played += 1;
            r.times_played
        })
    }

    fn slowest_duration_millis(&self, key: &LevelKey) -> i64 {
        self.read(key, |r| r.slowest_ms, 0)
    }

    fn set_slowest_duration_millis(&self, key: &LevelKey, duration_ms: i64) {
        self.update(key, |r| r.slowest_ms = duration_ms);
    }

    fn fastest_duration_millis(&self, key: &LevelKey) -> i64 {
        self.read(key, |r| r.fastest_ms.unwrap_or(i64::MAX), i64::MAX)
    }

    fn set_fastest_duration_millis(&self, key: &LevelKey, duration_ms: i64) {
        self.update(key, |r| r.fastest_ms = Some(duration_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_read_sentinel_values() {
        let storage = InMemoryLevelStorage::new();
        let key = LevelKey::from("main/level_1");

        assert_eq!(storage.times_started(&key), 0);
        assert_eq!(storage.times_played(&key), 0);
        assert_eq!(storage.slowest_duration_millis(&key), 0);
        assert_eq!(storage.fastest_duration_millis(&key), i64::MAX);
    }

    #[test]
    fn counters_increment_per_key() {
        let storage = InMemoryLevelStorage::new();
        let first = LevelKey::from("main/level_1");
        let second = LevelKey::from("main/level_2");

        assert_eq!(storage.inc_times_started(&first), 1);
        assert_eq!(storage.inc_times_started(&first), 2);
        assert_eq!(storage.inc_times_played(&first), 1);

        assert_eq!(storage.times_started(&first), 2);
        assert_eq!(storage.times_started(&second), 0);
    }

    #[test]
    fn extrema_are_stored_as_written() {
        let storage = InMemoryLevelStorage::new();
        let key = LevelKey::from("main/level_1");

        storage.set_slowest_duration_millis(&key, 9_000);
        storage.set_fastest_duration_millis(&key, 1_200);

        assert_eq!(storage.slowest_duration_millis(&key), 9_000);
        assert_eq!(storage.fastest_duration_millis(&key), 1_200);
    }
}
