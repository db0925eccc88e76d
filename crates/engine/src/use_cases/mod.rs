//! Use cases orchestrating the domain model and the ports.

pub mod level;
