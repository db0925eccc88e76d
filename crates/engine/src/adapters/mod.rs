//! Adapters - concrete implementations of the engine's ports.

pub mod memory;

pub use memory::InMemoryLevelStorage;
