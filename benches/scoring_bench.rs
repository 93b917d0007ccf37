use criterion::{criterion_group, criterion_main, Criterion};
use mechforge::config::Config;
use mechforge::knowledge::loader::UnitMeta;
use mechforge::knowledge::KnowledgeBase;
use mechforge::roster::Roster;
use mechforge::scorer::Scorer;
use mechforge::tiers::Tier;
use std::collections::HashMap;
use std::hint::black_box;

// Synthetic knowledge base sized like the real game roster (tens of
// units) with dense counter webs.
fn setup_scorer(units: usize) -> Scorer {
    let name = |i: usize| format!("Unit{:02}", i);

    let mut counters = HashMap::new();
    let mut tiers = HashMap::new();
    let mut meta = HashMap::new();
    for i in 0..units {
        let cb: Vec<String> = (0..units)
            .filter(|j| j % 5 == i % 5 && *j != i)
            .map(name)
            .collect();
        let ua: Vec<String> = (0..units)
            .filter(|j| j % 7 == i % 7 && *j != i)
            .map(name)
            .collect();
        counters.insert(name(i), (cb, ua));
        let tier = match i % 5 {
            0 => Tier::S,
            1 => Tier::A,
            2 => Tier::B,
            3 => Tier::C,
            _ => Tier::D,
        };
        tiers.insert(name(i), tier);
        meta.insert(
            name(i),
            UnitMeta {
                cost: 100 + (i as u32 % 8) * 200,
                unlock_cost: if i % 3 == 0 { 50 } else { 0 },
                titan: i % 11 == 0,
                giant: i % 4 == 0,
            },
        );
    }
    let kb = KnowledgeBase::from_parts(counters, tiers, meta, 300, 0);
    Scorer::new(kb, Config::default())
}

fn bench_rank(c: &mut Criterion) {
    let scorer = setup_scorer(60);
    let name = |i: usize| format!("Unit{:02}", i);
    let roster = Roster::new(
        (0..6).map(name).collect(),
        (20..28).map(name).collect(),
        (20..22).map(name).collect(),
        7,
    );

    c.bench_function("rank_60_units", |b| {
        b.iter(|| {
            let ranked = scorer.rank(black_box(&roster));
            black_box(ranked)
        })
    });

    c.bench_function("score_unit", |b| {
        b.iter(|| black_box(scorer.score_unit(black_box("Unit33"), &roster)))
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
