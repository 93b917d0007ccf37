use crate::knowledge::KnowledgeBase;
use std::collections::HashSet;

/// Coverage split for one candidate against the current rosters.
/// Lists are sorted so downstream output is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coverage {
    /// Enemy units the candidate covers that nothing fielded covers.
    pub new_coverage: Vec<String>,
    /// Enemy units the candidate covers that are already handled.
    pub overlap_coverage: Vec<String>,
}

impl Coverage {
    pub fn total(&self) -> usize {
        self.new_coverage.len() + self.overlap_coverage.len()
    }
}

/// Enemy units some fielded unit already covers. Depends only on the
/// rosters, so `rank` hoists it once per pass.
pub fn already_covered(
    kb: &KnowledgeBase,
    my_units: &[String],
    enemy_units: &[String],
) -> HashSet<String> {
    enemy_units
        .iter()
        .filter(|e| my_units.iter().any(|m| kb.counters(m, e)))
        .cloned()
        .collect()
}

/// Split of the candidate's coverage given a precomputed
/// already-covered set.
pub fn analyze_with(
    kb: &KnowledgeBase,
    candidate: &str,
    enemy_units: &[String],
    already: &HashSet<String>,
) -> Coverage {
    let mut new_coverage = Vec::new();
    let mut overlap_coverage = Vec::new();
    for e in enemy_units {
        if !kb.counters(candidate, e) {
            continue;
        }
        if already.contains(e) {
            overlap_coverage.push(e.clone());
        } else {
            new_coverage.push(e.clone());
        }
    }
    new_coverage.sort();
    overlap_coverage.sort();
    Coverage {
        new_coverage,
        overlap_coverage,
    }
}

/// Self-contained form: recomputes the already-covered set. Identical
/// results to `analyze_with` by construction.
pub fn analyze(
    kb: &KnowledgeBase,
    candidate: &str,
    my_units: &[String],
    enemy_units: &[String],
) -> Coverage {
    let already = already_covered(kb, my_units, enemy_units);
    analyze_with(kb, candidate, enemy_units, &already)
}
