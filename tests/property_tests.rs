use mechforge::config::Config;
use mechforge::knowledge::loader::UnitMeta;
use mechforge::knowledge::KnowledgeBase;
use mechforge::roster::Roster;
use mechforge::scorer::{coverage, Scorer};
use mechforge::tiers::Tier;
use proptest::prelude::*;
use std::collections::HashMap;

const UNIVERSE: usize = 8;

fn name(i: usize) -> String {
    format!("U{}", i)
}

// --- STRATEGIES ---

// Adjacency matrices for the two relations, plus per-unit tier and
// class metadata. Small universe, dense enough to hit every term.
prop_compose! {
    fn arb_kb()(
        countered in prop::collection::vec(
            prop::collection::vec(any::<bool>(), UNIVERSE), UNIVERSE),
        used in prop::collection::vec(
            prop::collection::vec(any::<bool>(), UNIVERSE), UNIVERSE),
        tiers in prop::collection::vec(0u8..6, UNIVERSE),
        costs in prop::collection::vec(50u32..2000, UNIVERSE),
        titan_flags in prop::collection::vec(any::<bool>(), UNIVERSE),
        giant_flags in prop::collection::vec(any::<bool>(), UNIVERSE)
    ) -> KnowledgeBase {
        let mut counters = HashMap::new();
        for i in 0..UNIVERSE {
            let cb: Vec<String> = (0..UNIVERSE)
                .filter(|j| countered[i][*j])
                .map(name)
                .collect();
            let ua: Vec<String> = (0..UNIVERSE)
                .filter(|j| used[i][*j])
                .map(name)
                .collect();
            counters.insert(name(i), (cb, ua));
        }
        let tier_of = |v: u8| match v {
            0 => Tier::S,
            1 => Tier::A,
            2 => Tier::B,
            3 => Tier::C,
            4 => Tier::D,
            _ => Tier::Unranked,
        };
        let tiers: HashMap<String, Tier> = tiers
            .iter()
            .enumerate()
            .map(|(i, v)| (name(i), tier_of(*v)))
            .collect();
        let meta: HashMap<String, UnitMeta> = (0..UNIVERSE)
            .map(|i| {
                (
                    name(i),
                    UnitMeta {
                        cost: costs[i],
                        unlock_cost: 0,
                        titan: titan_flags[i],
                        giant: giant_flags[i],
                    },
                )
            })
            .collect();
        KnowledgeBase::from_parts(counters, tiers, meta, 300, 0)
    }
}

prop_compose! {
    fn arb_roster()(
        mine in prop::collection::vec(any::<bool>(), UNIVERSE),
        enemy in prop::collection::vec(any::<bool>(), UNIVERSE),
        struggle in prop::collection::vec(any::<bool>(), UNIVERSE),
        round in 1u32..20
    ) -> Roster {
        let pick = |flags: &[bool]| -> Vec<String> {
            flags.iter().enumerate().filter(|(_, f)| **f).map(|(i, _)| name(i)).collect()
        };
        Roster::new(pick(&mine), pick(&enemy), pick(&struggle), round)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn coverage_partition_holds(kb in arb_kb(), roster in arb_roster()) {
        for i in 0..UNIVERSE {
            let candidate = name(i);
            let cov = coverage::analyze(&kb, &candidate, &roster.my_units, &roster.enemy_units);

            // Disjoint halves.
            for e in &cov.new_coverage {
                prop_assert!(!cov.overlap_coverage.contains(e));
            }

            // Union is exactly covers(candidate) ∩ enemy.
            let mut union: Vec<String> = cov
                .new_coverage
                .iter()
                .chain(cov.overlap_coverage.iter())
                .cloned()
                .collect();
            union.sort();
            let mut covers: Vec<String> = roster
                .enemy_units
                .iter()
                .filter(|e| kb.counters(&candidate, e))
                .cloned()
                .collect();
            covers.sort();
            prop_assert_eq!(union, covers);
        }
    }

    #[test]
    fn hoisting_already_covered_is_transparent(kb in arb_kb(), roster in arb_roster()) {
        let already = coverage::already_covered(&kb, &roster.my_units, &roster.enemy_units);
        for i in 0..UNIVERSE {
            let candidate = name(i);
            let direct = coverage::analyze(&kb, &candidate, &roster.my_units, &roster.enemy_units);
            let hoisted = coverage::analyze_with(&kb, &candidate, &roster.enemy_units, &already);
            prop_assert_eq!(direct, hoisted);
        }
    }

    #[test]
    fn rank_is_total_deterministic_and_finite(kb in arb_kb(), roster in arb_roster()) {
        let scorer = Scorer::new(kb, Config::default());

        let first = scorer.rank(&roster);
        let second = scorer.rank(&roster);
        prop_assert_eq!(first.len(), UNIVERSE);

        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(&a.name, &b.name);
            prop_assert_eq!(a.score, b.score);
        }

        for pair in first.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].name < pair[1].name);
            }
        }

        for c in &first {
            prop_assert!(c.score.is_finite(), "score not finite for {}", c.name);
            prop_assert!(
                c.breakdown.struggle_priority == 0.0
                    || c.breakdown.struggle_priority == 10.0
            );
        }
    }

    #[test]
    fn score_unit_agrees_with_rank(kb in arb_kb(), roster in arb_roster()) {
        let scorer = Scorer::new(kb, Config::default());
        let ranked = scorer.rank(&roster);
        for c in &ranked {
            let solo = scorer.score_unit(&c.name, &roster);
            prop_assert_eq!(solo.score, c.score, "divergence for {}", &c.name);
        }
    }
}
