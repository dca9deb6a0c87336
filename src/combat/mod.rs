//! Combat: damage resolution and the battle round orchestrator.

pub mod damage;
pub mod narrative;
pub mod round;

pub use damage::{resolve_attack, AttackOutcome, CRIT_CHANCE, CRIT_MULTIPLIER};
pub use narrative::{RoundEvent, RoundNarrative};
pub use round::run_round;
