//! Roster integration tests: the factory table, identity, and typed lookup.

use hero_arena::{AttackStyle, HeroClass, HeroId, HeroIdAllocator, Roster, Stats};

// =============================================================================
// Factory Tests
// =============================================================================

/// Test that each class recruits with its full base-stat block and style.
#[test]
fn test_recruit_base_stat_table() {
    let mut roster = Roster::new();
    let warrior = roster.recruit("Dmytro", HeroClass::Warrior);
    let mage = roster.recruit("Merlin", HeroClass::Mage);
    let archer = roster.recruit("Liana", HeroClass::Archer);

    let warrior = roster.get(warrior).unwrap();
    assert_eq!(warrior.stats, Stats::new(100.0, 20.0, 15.0, 10.0));
    assert_eq!(warrior.attack_style, AttackStyle::Physical);
    assert!(warrior.is_alive());

    let mage = roster.get(mage).unwrap();
    assert_eq!(mage.stats, Stats::new(80.0, 25.0, 5.0, 15.0));
    assert_eq!(mage.attack_style, AttackStyle::Magical);

    let archer = roster.get(archer).unwrap();
    assert_eq!(archer.stats, Stats::new(90.0, 18.0, 10.0, 20.0));
    assert_eq!(archer.attack_style, AttackStyle::Ranged);
}

/// Test that ids are unique and sequential across a whole roster.
#[test]
fn test_ids_are_unique() {
    let mut roster = Roster::new();
    let ids: Vec<_> = (0..10)
        .map(|i| roster.recruit(format!("Hero{i}"), HeroClass::Warrior))
        .collect();

    for (i, id) in ids.iter().enumerate() {
        assert_eq!(*id, HeroId(i as u32 + 1));
    }
}

/// Test that an injected allocator controls the id sequence.
#[test]
fn test_injected_allocator() {
    let mut roster = Roster::with_allocator(HeroIdAllocator::starting_at(500));

    assert_eq!(roster.recruit("Late", HeroClass::Mage), HeroId(500));
}

// =============================================================================
// Lookup Tests
// =============================================================================

/// Test predicate lookups across class, name, and stats.
#[test]
fn test_typed_lookups() {
    let mut roster = Roster::new();
    roster.recruit("Dmytro", HeroClass::Warrior);
    roster.recruit("Merlin", HeroClass::Mage);
    roster.recruit("Liana", HeroClass::Archer);

    let warrior = roster.find(|h| h.class == HeroClass::Warrior).unwrap();
    assert_eq!(warrior.name, "Dmytro");

    let liana = roster.find_by_name("Liana").unwrap();
    assert_eq!(liana.class, HeroClass::Archer);

    let tanky = roster.find(|h| h.stats.defense >= 15.0).unwrap();
    assert_eq!(tanky.name, "Dmytro");

    assert!(roster.find(|h| !h.is_alive()).is_none());
}

/// Test that lookups see combat mutations.
#[test]
fn test_lookup_after_mutation() {
    let mut roster = Roster::new();
    let id = roster.recruit("Dmytro", HeroClass::Warrior);

    roster.get_mut(id).unwrap().apply_damage(100.0);

    let dead = roster.find(|h| !h.is_alive()).unwrap();
    assert_eq!(dead.id, id);
    assert_eq!(dead.stats.health, 0.0);
}
