//! Single-attack damage resolution.
//!
//! One attack is: pick the mitigation formula by the attacker's style,
//! clamp at zero, roll for a critical, apply to the defender. The defender
//! is mutated in place; the returned [`AttackOutcome`] is a pure record of
//! what happened.

use serde::{Deserialize, Serialize};

use crate::core::UnitRoll;
use crate::heroes::{AttackStyle, Hero};

/// Probability that any attack is a critical hit.
pub const CRIT_CHANCE: f64 = 0.2;

/// Damage multiplier applied on a critical hit.
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// What a single attack did.
///
/// Produced fresh per attack; `remaining_health` reflects the defender's
/// health after the clamp at zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Damage dealt, after mitigation, the critical multiplier, and the
    /// floor-at-zero clamp. Never negative.
    pub damage: f64,
    /// Whether the critical roll succeeded.
    pub critical: bool,
    /// Defender's health once the damage landed.
    pub remaining_health: f64,
}

/// Resolve one attack, mutating the defender's health and alive state.
///
/// Mitigation by attack style:
///
/// - Physical: `attack - 0.5 * defense`
/// - Magical: `1.2 * attack - 0.2 * defense`
/// - Ranged: `0.9 * attack - 0.3 * defense`
///
/// A critical hit (probability [`CRIT_CHANCE`]) doubles the already-clamped
/// damage. This never fails: an already-dead or zero-attack attacker just
/// produces a degenerate zero-damage outcome. Stats are assumed
/// non-negative; see [`Stats`](crate::heroes::Stats).
pub fn resolve_attack(
    attacker: &Hero,
    defender: &mut Hero,
    rng: &mut impl UnitRoll,
) -> AttackOutcome {
    let base = attacker.stats.attack;

    let raw = match attacker.attack_style {
        // Armor takes half its value off the blow
        AttackStyle::Physical => base - 0.5 * defender.stats.defense,
        // Amplified damage, armor barely matters
        AttackStyle::Magical => 1.2 * base - 0.2 * defender.stats.defense,
        // Slightly reduced damage, armor at a third
        AttackStyle::Ranged => 0.9 * base - 0.3 * defender.stats.defense,
    };

    // Clamp first; a critical doubles the clamped value, so it can never
    // turn a would-be-negative hit into damage
    let mut damage = raw.max(0.0);

    let critical = rng.roll() < CRIT_CHANCE;
    if critical {
        damage *= CRIT_MULTIPLIER;
    }

    let remaining_health = defender.apply_damage(damage);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        damage,
        critical,
        remaining_health,
        "attack resolved"
    );

    AttackOutcome {
        damage,
        critical,
        remaining_health,
    }
}
