//! Domain entities - The progression tree and its nodes.
//!
//! - `World`: generic progression node (gate, inner worlds, scores, missions)
//! - `Level`: a world with a play-session state machine and timer
//! - `Gate`: unlock condition
//! - `Score`: resettable point tracker
//! - `Mission`: objective marker

pub mod gate;
pub mod level;
pub mod mission;
pub mod score;
pub mod world;

pub use gate::{Gate, GateCondition};
pub use level::{Level, LevelState};
pub use mission::Mission;
pub use score::Score;
pub use world::World;
