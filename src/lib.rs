//! # hero-arena
//!
//! A turn-based hero duel engine: typed heroes trade blows using
//! archetype-specific damage formulas, with critical hits and health
//! depletion deciding survival.
//!
//! ## Design Principles
//!
//! 1. **In-Place Mutation**: Attacks mutate the defender directly. Exclusive
//!    access is the contract, and `&mut Hero` makes the compiler enforce it.
//!
//! 2. **Injectable Randomness**: Every probabilistic decision draws from a
//!    [`UnitRoll`] source. Production code seeds a [`BattleRng`]; tests and
//!    replays inject deterministic sources.
//!
//! 3. **Structured Narration**: A round produces [`RoundEvent`]s, not
//!    strings. The human-readable battle log is a `Display` rendering on top.
//!
//! ## Modules
//!
//! - `core`: Hero identity and RNG
//! - `heroes`: Stats, classes, the hero entity, and the roster
//! - `combat`: Damage resolution and the battle round orchestrator

pub mod core;
pub mod heroes;
pub mod combat;

// Re-export commonly used types
pub use crate::core::{BattleRng, BattleRngState, FixedRoll, HeroId, HeroIdAllocator, ScriptedRoll, UnitRoll};

pub use crate::heroes::{AttackStyle, Hero, HeroClass, Roster, Stats};

pub use crate::combat::{
    resolve_attack, run_round, AttackOutcome, RoundEvent, RoundNarrative, CRIT_CHANCE,
    CRIT_MULTIPLIER,
};
