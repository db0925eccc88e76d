//! Value objects shared across the progression tree.

pub mod level_key;

pub use level_key::LevelKey;
