//! Battle round orchestration.
//!
//! One round is one ordered exchange: the faster hero strikes, the survivor
//! (if any) strikes back, deaths are announced. No internal looping; a host
//! runs a longer battle by calling [`run_round`] again with the same pair.

use crate::core::UnitRoll;
use crate::heroes::Hero;

use super::damage::resolve_attack;
use super::narrative::{RoundEvent, RoundNarrative};

/// Run one battle round between two heroes.
///
/// - If either hero is already dead, the round refuses: a single
///   `BattleImpossible` event, no attacks, no mutation.
/// - The higher-speed hero attacks first. On a speed tie, `a` attacks
///   first; the tie-break is fixed, not randomized.
/// - The second attacker counterattacks only if it survived the opening
///   blow; otherwise the narrative records that explicitly.
/// - Any hero dead at the end of the round gets a death event, first
///   attacker checked first.
///
/// Both heroes are borrowed mutably for the whole round, so the exclusive
/// access the engine relies on is compiler-enforced.
pub fn run_round(a: &mut Hero, b: &mut Hero, rng: &mut impl UnitRoll) -> RoundNarrative {
    if !a.is_alive() || !b.is_alive() {
        tracing::debug!(a = %a.name, b = %b.name, "round refused, a hero is already dead");
        return RoundNarrative::impossible();
    }

    // Only a strictly faster b takes the lead; a speed tie keeps a first
    let (first, second) = if b.stats.speed > a.stats.speed {
        (b, a)
    } else {
        (a, b)
    };
    tracing::debug!(first = %first.name, second = %second.name, "round order decided");

    let mut narrative = RoundNarrative::new();

    let opening = resolve_attack(first, second, rng);
    narrative.push(RoundEvent::attack(first, second, opening));

    if second.is_alive() {
        let counter = resolve_attack(second, first, rng);
        narrative.push(RoundEvent::attack(second, first, counter));
    } else {
        narrative.push(RoundEvent::no_counterattack(second));
    }

    if !first.is_alive() {
        narrative.push(RoundEvent::death(first));
    }
    if !second.is_alive() {
        narrative.push(RoundEvent::death(second));
    }

    narrative
}
