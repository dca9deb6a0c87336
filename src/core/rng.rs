//! Randomness for combat rolls.
//!
//! ## Key Features
//!
//! - **Injectable**: combat draws from the [`UnitRoll`] trait, never from a
//!   global generator
//! - **Deterministic**: same seed produces an identical battle
//! - **Forkable**: independent streams for battles running side by side
//! - **Serializable**: O(1) state capture and restore for replay
//!
//! ## Usage
//!
//! ```
//! use hero_arena::core::{BattleRng, UnitRoll};
//!
//! let mut rng = BattleRng::new(42);
//! let roll = rng.roll();
//! assert!((0.0..1.0).contains(&roll));
//!
//! // Fork for a second battle running alongside the first
//! let mut side_rng = rng.fork();
//! assert_ne!(rng.roll(), side_rng.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A uniform-[0,1) random source.
///
/// The one seam between combat and randomness. Production code uses
/// [`BattleRng`]; tests and replays use [`FixedRoll`] or [`ScriptedRoll`].
pub trait UnitRoll {
    /// Draw the next value, uniformly distributed over [0, 1).
    fn roll(&mut self) -> f64;
}

/// Seeded RNG for battles.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
/// Supports forking for concurrent battles and O(1) state serialization.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// This is the default source when nothing deterministic is required.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence. Battles
    /// running side by side should each own a fork rather than share one
    /// generator.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl UnitRoll for BattleRng {
    fn roll(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for battle replay.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many rolls have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A source that returns the same value forever.
///
/// `FixedRoll(0.0)` makes every critical roll succeed; any value at or
/// above the critical chance makes every roll fail.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub f64);

impl UnitRoll for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

/// A source that plays back a scripted sequence of values.
///
/// After the script runs out, the last value repeats. Used to drive a round
/// through an exact series of critical outcomes.
#[derive(Clone, Debug)]
pub struct ScriptedRoll {
    rolls: Vec<f64>,
    next: usize,
}

impl ScriptedRoll {
    /// Create a scripted source. The script must not be empty.
    #[must_use]
    pub fn new(rolls: Vec<f64>) -> Self {
        assert!(!rolls.is_empty(), "Script must contain at least one roll");
        Self { rolls, next: 0 }
    }
}

impl UnitRoll for ScriptedRoll {
    fn roll(&mut self) -> f64 {
        let value = self.rolls[self.next.min(self.rolls.len() - 1)];
        self.next += 1;
        value
    }
}
