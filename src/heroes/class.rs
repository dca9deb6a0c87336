//! Hero classes and attack styles.
//!
//! Each class carries a fixed base-stat block and a fixed attack style.
//! The numbers are game balance constants, not derived from anything.

use serde::{Deserialize, Serialize};

use super::stats::Stats;

/// Hero archetype. Closed set: combat only ever sees these three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    /// High health and defense, moderate attack, slow.
    Warrior,
    /// Low health and defense, highest attack, fast.
    Mage,
    /// Middle of the road everywhere, fastest.
    Archer,
}

impl HeroClass {
    /// The attack style this class fights with.
    ///
    /// Fixed at creation; a hero never changes style.
    #[must_use]
    pub const fn attack_style(self) -> AttackStyle {
        match self {
            HeroClass::Warrior => AttackStyle::Physical,
            HeroClass::Mage => AttackStyle::Magical,
            HeroClass::Archer => AttackStyle::Ranged,
        }
    }

    /// The base stats a freshly created hero of this class starts with.
    #[must_use]
    pub const fn base_stats(self) -> Stats {
        match self {
            HeroClass::Warrior => Stats::new(100.0, 20.0, 15.0, 10.0),
            HeroClass::Mage => Stats::new(80.0, 25.0, 5.0, 15.0),
            HeroClass::Archer => Stats::new(90.0, 18.0, 10.0, 20.0),
        }
    }
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Mage => "Mage",
            HeroClass::Archer => "Archer",
        };
        write!(f, "{name}")
    }
}

/// How a hero's damage interacts with the defender's defense.
///
/// Selects the mitigation formula in [`resolve_attack`](crate::combat::resolve_attack).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Armor takes half its value off the blow.
    Physical,
    /// Amplified damage, armor barely matters.
    Magical,
    /// Slightly reduced damage, armor at a third.
    Ranged,
}

impl std::fmt::Display for AttackStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttackStyle::Physical => "Physical",
            AttackStyle::Magical => "Magical",
            AttackStyle::Ranged => "Ranged",
        };
        write!(f, "{name}")
    }
}
