//! Core engine types: hero identity and randomness.
//!
//! These are the building blocks the rest of the crate is assembled from.
//! Neither module knows anything about combat rules.

pub mod entity;
pub mod rng;

pub use entity::{HeroId, HeroIdAllocator};
pub use rng::{BattleRng, BattleRngState, FixedRoll, ScriptedRoll, UnitRoll};
