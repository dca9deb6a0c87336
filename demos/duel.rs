//! Exhibition duels: recruit a roster, look heroes up, trade a few rounds.
//!
//! Run with `cargo run --example duel`. Pass a number to seed the battle
//! and make it reproducible: `cargo run --example duel 42`.

use hero_arena::{run_round, BattleRng, HeroClass, Roster};

fn main() {
    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        Some(seed) => BattleRng::new(seed),
        None => BattleRng::from_entropy(),
    };

    let mut roster = Roster::new();
    let dmytro = roster.recruit("Dmytro", HeroClass::Warrior);
    let merlin = roster.recruit("Merlin", HeroClass::Mage);
    roster.recruit("Liana", HeroClass::Archer);
    let boris = roster.recruit("Boris", HeroClass::Warrior);
    let gandalf = roster.recruit("Gandalf", HeroClass::Mage);

    // Typed lookups instead of field-name strings
    if let Some(warrior) = roster.find(|h| h.class == HeroClass::Warrior) {
        println!("Found a warrior: {warrior}");
    }
    if let Some(liana) = roster.find_by_name("Liana") {
        println!("Found by name: {liana}");
    }
    println!();

    println!("=== Battle: Dmytro vs Merlin ===");
    let (a, b) = roster.pair_mut(dmytro, merlin).expect("both recruited above");
    print!("{}", run_round(a, b, &mut rng));
    print!("{}", run_round(a, b, &mut rng));
    println!("=== Battle over ===");
    println!();

    println!("=== Battle: Boris vs Gandalf ===");
    let (a, b) = roster.pair_mut(boris, gandalf).expect("both recruited above");
    print!("{}", run_round(a, b, &mut rng));
    print!("{}", run_round(a, b, &mut rng));
    println!("=== Battle over ===");
}
