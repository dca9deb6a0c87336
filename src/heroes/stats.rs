//! Combat stats.

use serde::{Deserialize, Serialize};

/// A hero's combat stats.
///
/// All values are non-negative. That is an accepted precondition of the
/// whole engine, not something it validates: negative inputs produce
/// arithmetic nonsense, never a crash.
///
/// Health is fractional because mitigation is: a 20-attack blow against
/// 15 defense deals 12.5.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Hit points. Zero means dead.
    pub health: f64,
    /// Raw damage before mitigation.
    pub attack: f64,
    /// Reduces incoming damage, weighted per attack style.
    pub defense: f64,
    /// Decides attack order within a round.
    pub speed: f64,
}

impl Stats {
    /// Create a stats block.
    #[must_use]
    pub const fn new(health: f64, attack: f64, defense: f64, speed: f64) -> Self {
        Self {
            health,
            attack,
            defense,
            speed,
        }
    }
}
