//! Hero data: stats, classes, the hero entity, and the roster that owns them.

pub mod class;
pub mod hero;
pub mod roster;
pub mod stats;

pub use class::{AttackStyle, HeroClass};
pub use hero::Hero;
pub use roster::Roster;
pub use stats::Stats;
