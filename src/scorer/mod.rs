pub mod boards;
pub mod coverage;
mod engine;
pub mod types;

pub use self::coverage::Coverage;
pub use self::types::{BoardRow, ScoreBreakdown, ScoredCandidate, ThreatLevel};

use crate::config::{Config, ScoringWeights, UnitClasses};
use crate::knowledge::KnowledgeBase;
use crate::roster::Roster;

/// The recommendation engine: a knowledge base plus the tuned
/// heuristic weights. Pure computation; every call treats the roster
/// as a read-only snapshot and returns fresh state.
pub struct Scorer {
    pub kb: KnowledgeBase,
    pub weights: ScoringWeights,
    pub classes: UnitClasses,
}

impl Scorer {
    pub fn new(kb: KnowledgeBase, config: Config) -> Self {
        Self {
            kb,
            weights: config.weights,
            classes: config.classes,
        }
    }

    /// Full evaluation of one candidate, recomputing the
    /// already-covered set locally. Total over any name: unknown
    /// candidates score with documented defaults.
    pub fn score_unit(&self, candidate: &str, roster: &Roster) -> ScoredCandidate {
        let already =
            coverage::already_covered(&self.kb, &roster.my_units, &roster.enemy_units);
        self.score_with(candidate, roster, &already)
    }

    /// Every known unit ranked by composite score, descending, ties
    /// broken by name so repeated calls agree byte for byte.
    pub fn rank(&self, roster: &Roster) -> Vec<ScoredCandidate> {
        let already =
            coverage::already_covered(&self.kb, &roster.my_units, &roster.enemy_units);
        let mut ranked: Vec<ScoredCandidate> = self
            .kb
            .unit_names()
            .iter()
            .map(|name| self.score_with(name, roster, &already))
            .collect();
        sort_ranked(&mut ranked);
        ranked
    }

    /// Round-1 advisory: the configured chaff units ranked by the
    /// same heuristic, best one surfaced as the early-game staple.
    pub fn chaff_advisory(&self, roster: &Roster) -> Option<ScoredCandidate> {
        if roster.round != 1 {
            return None;
        }
        let already =
            coverage::already_covered(&self.kb, &roster.my_units, &roster.enemy_units);
        let mut ranked: Vec<ScoredCandidate> = self
            .classes
            .get_chaff_units()
            .iter()
            .map(|name| self.score_with(name, roster, &already))
            .collect();
        sort_ranked(&mut ranked);
        ranked.into_iter().next()
    }

    fn score_with(
        &self,
        candidate: &str,
        roster: &Roster,
        already: &std::collections::HashSet<String>,
    ) -> ScoredCandidate {
        let (breakdown, cov) = engine::evaluate(self, candidate, roster, already);
        let explanations = engine::explain(self, candidate, &breakdown, &cov, roster);
        ScoredCandidate {
            name: candidate.to_string(),
            score: breakdown.total(),
            in_build: roster.fielded(candidate),
            breakdown,
            coverage: cov,
            explanations,
        }
    }
}

fn sort_ranked(ranked: &mut [ScoredCandidate]) {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
}
