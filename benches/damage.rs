//! Micro-benchmarks for attack and round resolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hero_arena::{resolve_attack, run_round, BattleRng, Hero, HeroClass, HeroId};

fn bench_resolve_attack(c: &mut Criterion) {
    let attacker = Hero::new(HeroId(1), "Boris", HeroClass::Warrior);
    let defender = Hero::new(HeroId(2), "Gandalf", HeroClass::Mage);
    let mut rng = BattleRng::new(42);

    c.bench_function("resolve_attack", |b| {
        b.iter(|| {
            let mut defender = defender.clone();
            resolve_attack(black_box(&attacker), &mut defender, &mut rng)
        })
    });
}

fn bench_run_round(c: &mut Criterion) {
    let a = Hero::new(HeroId(1), "Boris", HeroClass::Warrior);
    let b = Hero::new(HeroId(2), "Gandalf", HeroClass::Mage);
    let mut rng = BattleRng::new(42);

    c.bench_function("run_round", |bench| {
        bench.iter(|| {
            let mut a = a.clone();
            let mut b = b.clone();
            run_round(black_box(&mut a), black_box(&mut b), &mut rng)
        })
    });
}

criterion_group!(benches, bench_resolve_attack, bench_run_round);
criterion_main!(benches);
