//! Hero identification.
//!
//! Every hero has a unique `HeroId`, handed out by a `HeroIdAllocator`.
//!
//! ## Allocation
//!
//! Identity is explicit state, not a process-wide counter. Whatever
//! component constructs heroes (normally the [`Roster`](crate::heroes::Roster))
//! owns an allocator and draws ids from it. Two allocators produce
//! overlapping ids; don't mix heroes from independently-allocated pools
//! in one container.
//!
//! ## Usage
//!
//! ```
//! use hero_arena::core::{HeroId, HeroIdAllocator};
//!
//! let mut ids = HeroIdAllocator::new();
//! let first = ids.allocate();
//! let second = ids.allocate();
//!
//! assert_eq!(first, HeroId(1));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a hero.
///
/// Opaque to combat logic; only equality and display matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub u32);

impl HeroId {
    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for HeroId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hero({})", self.0)
    }
}

/// Sequential id allocator.
///
/// Ids start at 1 and increment. The allocator is plain serializable state,
/// so a host can persist and resume it alongside the heroes it named.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroIdAllocator {
    next: u32,
}

impl HeroIdAllocator {
    /// Create an allocator starting at id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Create an allocator starting at an arbitrary id.
    ///
    /// Useful when resuming a roster whose earlier ids are already taken.
    #[must_use]
    pub const fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> HeroId {
        let id = HeroId(self.next);
        self.next += 1;
        id
    }

    /// The id the next `allocate` call will return.
    #[must_use]
    pub const fn peek(&self) -> HeroId {
        HeroId(self.next)
    }
}

impl Default for HeroIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
