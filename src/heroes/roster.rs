//! Roster: owns heroes and their identity allocation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{HeroId, HeroIdAllocator};

use super::class::HeroClass;
use super::hero::Hero;

/// Owns a set of heroes and the allocator that names them.
///
/// The roster is the hero factory: [`Roster::recruit`] creates a hero from
/// the class base-stat table and assigns it a fresh id. Lookup is by id
/// (O(1) via an `FxHashMap` index) or by an arbitrary typed predicate.
///
/// ## Example
///
/// ```
/// use hero_arena::heroes::{HeroClass, Roster};
///
/// let mut roster = Roster::new();
/// let boris = roster.recruit("Boris", HeroClass::Warrior);
///
/// assert!(roster.get(boris).is_some());
/// assert!(roster.find(|h| h.class == HeroClass::Warrior).is_some());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    heroes: Vec<Hero>,
    /// Id -> position in `heroes`.
    index: FxHashMap<HeroId, usize>,
    ids: HeroIdAllocator,
}

impl Roster {
    /// Create an empty roster with ids starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heroes: Vec::new(),
            index: FxHashMap::default(),
            ids: HeroIdAllocator::new(),
        }
    }

    /// Create an empty roster with an explicit id allocator.
    ///
    /// Lets a host resume id allocation where a previous roster stopped.
    #[must_use]
    pub fn with_allocator(ids: HeroIdAllocator) -> Self {
        Self {
            heroes: Vec::new(),
            index: FxHashMap::default(),
            ids,
        }
    }

    /// Create a hero of the given class and take ownership of it.
    ///
    /// Stats come from the class base-stat table; the id from this roster's
    /// allocator.
    pub fn recruit(&mut self, name: impl Into<String>, class: HeroClass) -> HeroId {
        let id = self.ids.allocate();
        self.index.insert(id, self.heroes.len());
        self.heroes.push(Hero::new(id, name, class));
        id
    }

    /// Number of heroes on the roster, dead ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Get a hero by id.
    #[must_use]
    pub fn get(&self, id: HeroId) -> Option<&Hero> {
        self.index.get(&id).map(|&i| &self.heroes[i])
    }

    /// Get a hero by id, mutably.
    pub fn get_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        let i = *self.index.get(&id)?;
        Some(&mut self.heroes[i])
    }

    /// Find the first hero matching a predicate.
    ///
    /// This is the typed lookup: callers pass a closure over `&Hero` instead
    /// of a field name, so the compiler checks what used to be a string.
    #[must_use]
    pub fn find(&self, predicate: impl Fn(&Hero) -> bool) -> Option<&Hero> {
        self.heroes.iter().find(|h| predicate(h))
    }

    /// Find a hero by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Hero> {
        self.find(|h| h.name == name)
    }

    /// Borrow two distinct heroes mutably at once.
    ///
    /// This is how a battle round gets its exclusive access to both
    /// combatants. Returns `None` if the ids are equal or either is unknown.
    pub fn pair_mut(&mut self, a: HeroId, b: HeroId) -> Option<(&mut Hero, &mut Hero)> {
        if a == b {
            return None;
        }
        let ia = *self.index.get(&a)?;
        let ib = *self.index.get(&b)?;

        if ia < ib {
            let (left, right) = self.heroes.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.heroes.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    /// Iterate over all heroes in recruitment order.
    pub fn iter(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter()
    }
}
