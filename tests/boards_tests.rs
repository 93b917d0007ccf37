use mechforge::knowledge::KnowledgeBase;
use mechforge::roster::Roster;
use mechforge::scorer::boards;
use mechforge::tiers::Tier;
use std::collections::HashMap;

fn kb(counters: &[(&str, &[&str], &[&str])], tiers: &[(&str, Tier)]) -> KnowledgeBase {
    let counters: HashMap<String, (Vec<String>, Vec<String>)> = counters
        .iter()
        .map(|(name, cb, ua)| {
            (
                name.to_string(),
                (
                    cb.iter().map(|s| s.to_string()).collect(),
                    ua.iter().map(|s| s.to_string()).collect(),
                ),
            )
        })
        .collect();
    let tiers: HashMap<String, Tier> = tiers
        .iter()
        .map(|(name, t)| (name.to_string(), *t))
        .collect();
    KnowledgeBase::from_parts(counters, tiers, HashMap::new(), 300, 0)
}

fn units(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn counter_board_tallies_and_sorts_tier_weighted() {
    // Both A and B answer two enemies; A is ranked higher.
    let kb = kb(
        &[
            ("E1", &["A", "B"], &[]),
            ("E2", &["A", "B", "C"], &[]),
            ("A", &[], &[]),
            ("B", &[], &[]),
            ("C", &[], &[]),
        ],
        &[("A", Tier::S), ("B", Tier::B)],
    );
    let roster = Roster::new(vec![], units(&["E1", "E2"]), vec![], 3);

    let board = boards::counter_board(&kb, &roster);
    let names: Vec<&str> = board.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(board[0].count, 2);
    assert_eq!(board[0].covered, units(&["E1", "E2"]));
    assert_eq!(board[2].count, 1);
}

#[test]
fn counter_board_excludes_enemy_roster_itself() {
    // E2 answers E1, but fielding the opponent's own unit is not a
    // counter suggestion.
    let kb = kb(
        &[("E1", &["E2", "A"], &[]), ("E2", &[], &[]), ("A", &[], &[])],
        &[],
    );
    let roster = Roster::new(vec![], units(&["E1", "E2"]), vec![], 3);

    let board = boards::counter_board(&kb, &roster);
    let names: Vec<&str> = board.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn vulnerability_board_mirrors_counter_board_over_my_units() {
    let kb = kb(
        &[("M1", &["T"], &[]), ("M2", &["T"], &[]), ("T", &[], &[])],
        &[],
    );
    let roster = Roster::new(units(&["M1", "M2"]), vec![], vec![], 3);

    let board = boards::vulnerability_board(&kb, &roster);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "T");
    assert_eq!(board[0].count, 2);
}

#[test]
fn safe_and_punish_split_on_enemy_answers() {
    // E answers M1 (countered_by) and X (used_against). M2 and Y are
    // untouched.
    let kb = kb(
        &[
            ("M1", &["E"], &[]),
            ("M2", &[], &[]),
            ("X", &[], &[]),
            ("Y", &[], &[]),
            ("E", &[], &["X"]),
        ],
        &[],
    );
    let roster = Roster::new(units(&["M1", "M2"]), units(&["E"]), vec![], 3);

    assert_eq!(boards::safe_upgrades(&kb, &roster), units(&["M2"]));

    let punish = boards::punish_picks(&kb, &roster);
    // Sorted, unfielded, unanswered. E itself qualifies: nothing
    // recorded answers it.
    assert_eq!(punish, units(&["E", "Y"]));
}

#[test]
fn avoid_list_ranks_by_answer_count_with_hard_label_at_two() {
    let kb = kb(
        &[
            ("X", &[], &[]),
            ("Y", &[], &[]),
            ("E1", &[], &["X", "Y"]),
            ("E2", &[], &["X"]),
        ],
        &[],
    );
    let roster = Roster::new(vec![], units(&["E1", "E2"]), vec![], 3);

    let avoid = boards::avoid_list(&kb, &roster);
    assert_eq!(avoid[0].name, "X");
    assert_eq!(avoid[0].count, 2);
    assert_eq!(avoid[0].covered, units(&["E1", "E2"]));
    assert_eq!(avoid[1].name, "Y");
    assert_eq!(avoid[1].count, 1);

    use mechforge::scorer::ThreatLevel;
    assert_eq!(ThreatLevel::from_count(avoid[0].count), ThreatLevel::Hard);
    assert_eq!(ThreatLevel::from_count(avoid[1].count), ThreatLevel::Soft);
}

#[test]
fn all_boards_empty_for_empty_rosters() {
    let kb = kb(&[("X", &["Y"], &[]), ("Y", &[], &[])], &[]);
    let roster = Roster::new(vec![], vec![], vec![], 1);

    assert!(boards::counter_board(&kb, &roster).is_empty());
    assert!(boards::vulnerability_board(&kb, &roster).is_empty());
    assert!(boards::safe_upgrades(&kb, &roster).is_empty());
    assert!(boards::avoid_list(&kb, &roster).is_empty());
}
