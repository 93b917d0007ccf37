use crate::scorer::coverage::Coverage;

/// Labeled contributions of the composite heuristic. One field per
/// term so explanations can list nonzero terms instead of re-deriving
/// them, and tests can pin each policy independently.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// New coverage reward minus overlap discount.
    pub coverage: f32,
    /// Tier ordinal weighted.
    pub tier: f32,
    /// Flat bonus for upgrading something already fielded.
    pub in_build: f32,
    /// Hard exclusion for a second titan.
    pub titan_exclusion: f32,
    /// Stacking penalty for piling on giants.
    pub giant_stacking: f32,
    /// Round-dependent titan/giant timing penalty.
    pub round_class: f32,
    /// Round-dependent cost term; sign flips at round 4.
    pub cost: f32,
    /// Penalty per enemy unit that answers the candidate.
    pub enemy_pressure: f32,
    /// Flat bonus for answering a flagged struggle unit.
    pub struggle_priority: f32,
    /// Chaff/clearing-unit round-1 special cases.
    pub opener: f32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f32 {
        self.coverage
            + self.tier
            + self.in_build
            + self.titan_exclusion
            + self.giant_stacking
            + self.round_class
            + self.cost
            + self.enemy_pressure
            + self.struggle_priority
            + self.opener
    }
}

/// One ranked candidate with its score, term breakdown, coverage
/// split and generated justification lines.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub name: String,
    pub score: f32,
    pub in_build: bool,
    pub breakdown: ScoreBreakdown,
    pub coverage: Coverage,
    pub explanations: Vec<String>,
}

/// One row of the counter/vulnerability boards: a unit, how many
/// roster units it answers, and which ones.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub name: String,
    pub count: usize,
    pub covered: Vec<String>,
}

/// Avoid-list severity: two or more enemy answers is a hard counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
    Soft,
    Hard,
}

impl ThreatLevel {
    pub fn from_count(n: usize) -> Self {
        if n >= 2 {
            ThreatLevel::Hard
        } else {
            ThreatLevel::Soft
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::Hard => "hard",
            ThreatLevel::Soft => "soft",
        }
    }
}
