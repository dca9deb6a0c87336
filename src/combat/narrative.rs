//! Structured round narration.
//!
//! A round produces events, not strings. Hosts that want the classic battle
//! log render the narrative through `Display`; hosts that want data (a UI,
//! a replay file) read the events directly. Both views carry the same
//! semantics.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::HeroId;
use crate::heroes::Hero;

use super::damage::AttackOutcome;

/// One thing that happened during a round.
///
/// Events carry hero names alongside ids so a narrative stays renderable
/// after the heroes themselves have moved on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// An attack landed (possibly for zero damage).
    Attack {
        attacker: HeroId,
        attacker_name: String,
        defender: HeroId,
        defender_name: String,
        outcome: AttackOutcome,
    },
    /// The second attacker died to the opening blow; no counterattack.
    NoCounterattack { fallen: HeroId, fallen_name: String },
    /// A combatant is dead at the end of the round.
    Death { hero: HeroId, name: String },
    /// A combatant was already dead; no attacks were made.
    BattleImpossible,
}

impl RoundEvent {
    /// Record an attack.
    #[must_use]
    pub fn attack(attacker: &Hero, defender: &Hero, outcome: AttackOutcome) -> Self {
        RoundEvent::Attack {
            attacker: attacker.id,
            attacker_name: attacker.name.clone(),
            defender: defender.id,
            defender_name: defender.name.clone(),
            outcome,
        }
    }

    /// Record that the fallen second attacker cannot counterattack.
    #[must_use]
    pub fn no_counterattack(fallen: &Hero) -> Self {
        RoundEvent::NoCounterattack {
            fallen: fallen.id,
            fallen_name: fallen.name.clone(),
        }
    }

    /// Record a death.
    #[must_use]
    pub fn death(hero: &Hero) -> Self {
        RoundEvent::Death {
            hero: hero.id,
            name: hero.name.clone(),
        }
    }
}

impl std::fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundEvent::Attack {
                attacker_name,
                defender_name,
                outcome,
                ..
            } => {
                write!(
                    f,
                    "{} attacks {}. Dealt {} damage{}. {}'s remaining health: {}.",
                    attacker_name,
                    defender_name,
                    outcome.damage,
                    if outcome.critical { " (Critical hit!)" } else { "" },
                    defender_name,
                    outcome.remaining_health,
                )
            }
            RoundEvent::NoCounterattack { fallen_name, .. } => {
                write!(f, "{fallen_name} has fallen, there will be no counterattack.")
            }
            RoundEvent::Death { name, .. } => {
                write!(f, "{name} has fallen in battle!")
            }
            RoundEvent::BattleImpossible => {
                write!(f, "The battle is impossible, one of the heroes is dead!")
            }
        }
    }
}

/// Everything that happened in one round, in order.
///
/// At most four events: the opening attack, a counterattack or the explicit
/// no-counterattack, and up to two deaths. `SmallVec` keeps the whole
/// narrative inline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundNarrative {
    events: SmallVec<[RoundEvent; 4]>,
}

impl RoundNarrative {
    /// An empty narrative, ready for events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The narrative of a round that could not happen.
    #[must_use]
    pub fn impossible() -> Self {
        let mut narrative = Self::new();
        narrative.push(RoundEvent::BattleImpossible);
        narrative
    }

    /// Append an event.
    pub fn push(&mut self, event: RoundEvent) {
        self.events.push(event);
    }

    /// The events of this round, in order.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Whether this round was refused because a combatant was already dead.
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        matches!(self.events.first(), Some(RoundEvent::BattleImpossible))
    }
}

impl std::fmt::Display for RoundNarrative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
