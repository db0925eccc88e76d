//! Storage key for a level's persisted statistics.
//!
//! Counters and duration extrema are keyed by the level's position in the
//! progression tree, not by instance identity. The key is an explicit
//! composite path (`"world/inner/level"`) so storage backends can persist
//! statistics without holding back-references into the tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::WorldId;

/// Composite path identifying a level for storage purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelKey(String);

impl LevelKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Builds the key from the ancestry of world ids (outermost first)
    /// followed by the level's own id.
    pub fn from_ancestry<'a>(
        ancestry: impl IntoIterator<Item = &'a WorldId>,
        level_id: &WorldId,
    ) -> Self {
        let mut parts: Vec<&str> = ancestry.into_iter().map(WorldId::as_str).collect();
        parts.push(level_id.as_str());
        Self(parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LevelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LevelKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LevelKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}
