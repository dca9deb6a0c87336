//! The hero entity.

use serde::{Deserialize, Serialize};

use crate::core::HeroId;

use super::class::{AttackStyle, HeroClass};
use super::stats::Stats;

/// A combatant.
///
/// Created once, then mutated in place by combat; never destroyed, only
/// transitioned to a dead state. `&mut Hero` is the exclusive-access
/// contract: no other mutator may hold the same hero during a round.
///
/// ## Invariant
///
/// `is_alive() == (stats.health > 0)` after every mutation. All damage goes
/// through [`Hero::apply_damage`], which clamps health at zero and keeps the
/// flag in sync. Constructing a hero with zero health yields a dead hero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identity within the owning roster.
    pub id: HeroId,
    /// Display name for narration.
    pub name: String,
    /// Archetype; fixes the attack style at creation.
    pub class: HeroClass,
    /// How this hero's damage is mitigated. Derived from class, never changes.
    pub attack_style: AttackStyle,
    /// Current combat stats. Health is the only stat combat mutates.
    pub stats: Stats,
    alive: bool,
}

impl Hero {
    /// Create a hero of the given class with its base stats.
    #[must_use]
    pub fn new(id: HeroId, name: impl Into<String>, class: HeroClass) -> Self {
        Self::with_stats(id, name, class, class.base_stats())
    }

    /// Create a hero with explicit stats instead of the class table.
    #[must_use]
    pub fn with_stats(id: HeroId, name: impl Into<String>, class: HeroClass, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            attack_style: class.attack_style(),
            stats,
            alive: stats.health > 0.0,
        }
    }

    /// Whether this hero is still standing.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Take damage, clamping health at zero.
    ///
    /// Returns the remaining health after the clamp. A hero whose health
    /// reaches zero is marked dead.
    pub fn apply_damage(&mut self, damage: f64) -> f64 {
        self.stats.health -= damage;
        if self.stats.health <= 0.0 {
            self.stats.health = 0.0;
            self.alive = false;
        }
        self.stats.health
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} the {}", self.name, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> Hero {
        Hero::new(HeroId(1), "Boris", HeroClass::Warrior)
    }

    #[test]
    fn test_new_uses_class_table() {
        let hero = warrior();

        assert_eq!(hero.stats, HeroClass::Warrior.base_stats());
        assert_eq!(hero.attack_style, AttackStyle::Physical);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_apply_damage_reduces_health() {
        let mut hero = warrior();

        let remaining = hero.apply_damage(12.5);

        assert_eq!(remaining, 87.5);
        assert_eq!(hero.stats.health, 87.5);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_lethal_damage_clamps_to_zero_and_kills() {
        let mut hero = warrior();

        let remaining = hero.apply_damage(250.0);

        assert_eq!(remaining, 0.0);
        assert_eq!(hero.stats.health, 0.0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_exact_lethal_damage_kills() {
        let mut hero = warrior();

        hero.apply_damage(100.0);

        assert_eq!(hero.stats.health, 0.0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_zero_damage_leaves_hero_untouched() {
        let mut hero = warrior();

        hero.apply_damage(0.0);

        assert_eq!(hero.stats.health, 100.0);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_with_zero_health_starts_dead() {
        let hero = Hero::with_stats(
            HeroId(2),
            "Ghost",
            HeroClass::Mage,
            Stats::new(0.0, 25.0, 5.0, 15.0),
        );

        assert!(!hero.is_alive());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", warrior()), "Boris the Warrior");
    }

    #[test]
    fn test_serialization_preserves_alive_flag() {
        let mut hero = warrior();
        hero.apply_damage(100.0);

        let json = serde_json::to_string(&hero).unwrap();
        let deserialized: Hero = serde_json::from_str(&json).unwrap();

        assert_eq!(hero, deserialized);
        assert!(!deserialized.is_alive());
    }
}
