use crate::knowledge::KnowledgeBase;
use crate::roster::Roster;
use crate::scorer::types::BoardRow;
use std::collections::HashMap;

// Tally of countered_by entries over one roster side. Units already
// on that side are removed from the tally, since fielding a unit the
// opponent also fields is not a counter pick.
fn counter_tally(kb: &KnowledgeBase, side: &[String]) -> Vec<BoardRow> {
    let mut tally: HashMap<String, Vec<String>> = HashMap::new();
    for target in side {
        if let Some(unit) = kb.lookup(target) {
            for c in &unit.countered_by {
                tally.entry(c.clone()).or_default().push(target.clone());
            }
        }
    }
    for fielded in side {
        tally.remove(fielded);
    }

    let mut rows: Vec<BoardRow> = tally
        .into_iter()
        .map(|(name, mut covered)| {
            covered.sort();
            BoardRow {
                count: covered.len(),
                name,
                covered,
            }
        })
        .collect();
    sort_tier_weighted(kb, &mut rows);
    rows
}

// (count desc, tier desc, name asc) — ranked units win ties against
// unranked ones.
fn sort_tier_weighted(kb: &KnowledgeBase, rows: &mut [BoardRow]) {
    rows.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| kb.tier_of(&b.name).board_rank().cmp(&kb.tier_of(&a.name).board_rank()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Units that counter the enemy roster, tier-weighted, best first.
pub fn counter_board(kb: &KnowledgeBase, roster: &Roster) -> Vec<BoardRow> {
    counter_tally(kb, &roster.enemy_units)
}

/// Units that counter my own roster: the holes in my build.
pub fn vulnerability_board(kb: &KnowledgeBase, roster: &Roster) -> Vec<BoardRow> {
    counter_tally(kb, &roster.my_units)
}

/// Fielded units the enemy has no recorded answer to.
pub fn safe_upgrades(kb: &KnowledgeBase, roster: &Roster) -> Vec<String> {
    roster
        .my_units
        .iter()
        .filter(|m| !roster.enemy_units.iter().any(|e| kb.beats(e, m)))
        .cloned()
        .collect()
}

/// Unfielded units the enemy has no recorded answer to.
pub fn punish_picks(kb: &KnowledgeBase, roster: &Roster) -> Vec<String> {
    kb.unit_names()
        .into_iter()
        .filter(|u| !roster.fielded(u) && !roster.enemy_units.iter().any(|e| kb.beats(e, u)))
        .collect()
}

/// Units the current enemy build punishes immediately, worst first.
/// Presenters label count >= 2 as a hard counter.
pub fn avoid_list(kb: &KnowledgeBase, roster: &Roster) -> Vec<BoardRow> {
    let mut rows: Vec<BoardRow> = kb
        .unit_names()
        .into_iter()
        .filter_map(|candidate| {
            let mut answers: Vec<String> = roster
                .enemy_units
                .iter()
                .filter(|e| {
                    kb.lookup(e)
                        .map(|u| u.used_against.contains(&candidate))
                        .unwrap_or(false)
                })
                .cloned()
                .collect();
            if answers.is_empty() {
                return None;
            }
            answers.sort();
            Some(BoardRow {
                name: candidate,
                count: answers.len(),
                covered: answers,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    rows
}
