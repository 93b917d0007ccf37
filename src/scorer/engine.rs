use crate::roster::Roster;
use crate::scorer::coverage::{self, Coverage};
use crate::scorer::types::ScoreBreakdown;
use crate::scorer::Scorer;
use std::collections::HashSet;

// Floor for the late-round cost divisor. The curve
// `600 - 50*(round-6)` crosses zero at round 18; past round 16 the
// divisor holds at 50 instead of blowing up.
const MIN_LATE_COST_DIVISOR: f32 = 50.0;

/// Evaluates every term for one candidate. All state is fresh per
/// call: no term may leak a value from a previous candidate.
pub(crate) fn evaluate(
    scorer: &Scorer,
    candidate: &str,
    roster: &Roster,
    already: &HashSet<String>,
) -> (ScoreBreakdown, Coverage) {
    let cov = coverage::analyze_with(&scorer.kb, candidate, &roster.enemy_units, already);

    let b = ScoreBreakdown {
        coverage: coverage_term(scorer, &cov),
        tier: tier_term(scorer, candidate),
        in_build: in_build_term(scorer, candidate, roster),
        titan_exclusion: titan_exclusion_term(scorer, candidate, roster),
        giant_stacking: giant_stacking_term(scorer, candidate, roster),
        round_class: round_class_term(scorer, candidate, roster.round),
        cost: cost_term(scorer, candidate, roster.round),
        enemy_pressure: enemy_pressure_term(scorer, candidate, roster),
        struggle_priority: struggle_priority_term(scorer, candidate, roster),
        opener: opener_term(scorer, candidate, roster),
    };
    (b, cov)
}

fn coverage_term(scorer: &Scorer, cov: &Coverage) -> f32 {
    cov.new_coverage.len() as f32 * scorer.weights.bonus_new_coverage
        - cov.overlap_coverage.len() as f32 * scorer.weights.penalty_overlap_coverage
}

fn tier_term(scorer: &Scorer, candidate: &str) -> f32 {
    scorer.kb.tier_of(candidate).ordinal() as f32 * scorer.weights.weight_tier
}

fn in_build_term(scorer: &Scorer, candidate: &str, roster: &Roster) -> f32 {
    if roster.fielded(candidate) {
        scorer.weights.bonus_in_build
    } else {
        0.0
    }
}

fn is_titan(scorer: &Scorer, name: &str) -> bool {
    scorer.kb.lookup(name).map(|u| u.is_titan).unwrap_or(false)
}

fn is_giant(scorer: &Scorer, name: &str) -> bool {
    scorer.kb.lookup(name).map(|u| u.is_giant).unwrap_or(false)
}

// One titan per build. The candidate is not its own duplicate, so
// upgrading the fielded titan stays legal.
fn titan_exclusion_term(scorer: &Scorer, candidate: &str, roster: &Roster) -> f32 {
    if !is_titan(scorer, candidate) {
        return 0.0;
    }
    let other_titan = roster
        .my_units
        .iter()
        .any(|m| m != candidate && is_titan(scorer, m));
    if other_titan {
        -scorer.weights.penalty_titan_duplicate
    } else {
        0.0
    }
}

fn giant_stacking_term(scorer: &Scorer, candidate: &str, roster: &Roster) -> f32 {
    if !is_giant(scorer, candidate) {
        return 0.0;
    }
    let fielded_giants = roster
        .my_units
        .iter()
        .filter(|m| m.as_str() != candidate && is_giant(scorer, m))
        .count();
    let penalties = scorer.weights.get_giant_stack_penalties();
    -penalties[fielded_giants.min(penalties.len() - 1)]
}

fn round_class_term(scorer: &Scorer, candidate: &str, round: u32) -> f32 {
    let w = &scorer.weights;
    let mut term = 0.0;
    if is_titan(scorer, candidate) {
        term += match round {
            1..=5 => -w.penalty_titan_early,
            6 => -w.penalty_titan_round6,
            // Linear ramp back to neutral: -3, -2, -1 over rounds 7-9.
            7..=9 => round as f32 - 10.0,
            _ => 0.0,
        };
    }
    if is_giant(scorer, candidate) && (1..=3).contains(&round) {
        term -= w.penalty_giant_early;
    }
    term
}

fn cost_term(scorer: &Scorer, candidate: &str, round: u32) -> f32 {
    let w = &scorer.weights;
    let total = scorer
        .kb
        .lookup(candidate)
        .map(|u| u.cost + u.unlock_cost)
        .unwrap_or(w.default_cost + w.default_unlock_cost) as f32;
    match round {
        // Early rounds: expensive units choke the economy.
        1..=3 => -total / w.cost_divisor_early,
        // From round 4 the sign flips: money exists, spend it.
        4..=6 => total / w.cost_divisor_mid,
        r => {
            let divisor = (w.cost_divisor_late_base
                - w.cost_divisor_late_step * (r as f32 - 6.0))
                .max(MIN_LATE_COST_DIVISOR);
            total / divisor
        }
    }
}

// Union of both recorded directions: an enemy answers the candidate
// when it appears in the candidate's countered_by, or the candidate
// appears in the enemy's used_against.
fn enemy_pressure_term(scorer: &Scorer, candidate: &str, roster: &Roster) -> f32 {
    let answers = roster
        .enemy_units
        .iter()
        .filter(|e| scorer.kb.beats(e, candidate))
        .count();
    -(answers as f32) * scorer.weights.penalty_enemy_counter
}

fn struggle_priority_term(scorer: &Scorer, candidate: &str, roster: &Roster) -> f32 {
    let answers_struggle = scorer.kb.lookup(candidate).is_some_and(|u| {
        roster
            .struggle_units
            .iter()
            .any(|s| u.used_against.contains(s))
    });
    if answers_struggle {
        scorer.weights.bonus_struggle_priority
    } else {
        0.0
    }
}

fn opener_term(scorer: &Scorer, candidate: &str, roster: &Roster) -> f32 {
    let w = &scorer.weights;
    let mut term = 0.0;
    if scorer.classes.is_chaff(candidate) {
        if roster.round == 1 {
            term += w.bonus_chaff_opener;
        } else {
            // Committed chaff is done; spend elsewhere.
            term -= w.penalty_chaff_late;
        }
    }
    if roster.round == 1
        && scorer.classes.is_clear_unit(candidate)
        && !roster.fielded(candidate)
    {
        let enemy_has_chaff = roster
            .enemy_units
            .iter()
            .any(|e| scorer.classes.is_chaff(e));
        term += if enemy_has_chaff {
            w.bonus_clear_vs_chaff
        } else {
            w.bonus_clear_opener
        };
    }
    term
}

/// Human-readable justification lines, generated from the breakdown
/// so nothing is re-derived.
pub(crate) fn explain(
    scorer: &Scorer,
    candidate: &str,
    breakdown: &ScoreBreakdown,
    cov: &Coverage,
    roster: &Roster,
) -> Vec<String> {
    let mut lines = Vec::new();

    if roster.fielded(candidate) {
        lines.push(format!(
            "Upgrading {} makes sense because it already sits in your build.",
            candidate
        ));
    } else {
        lines.push(format!("Adding {} to your build is attractive.", candidate));
    }
    lines.push(format!("Composite score: {:.1}.", breakdown.total()));

    if let Some(unit) = scorer.kb.lookup(candidate) {
        if unit.unlock_cost > 0 {
            lines.push(format!(
                "Costs {} supply plus a {} unlock.",
                unit.cost, unit.unlock_cost
            ));
        } else {
            lines.push(format!("Costs {} supply.", unit.cost));
        }
        if unit.is_titan {
            lines.push("Titan class: only one fits a build.".to_string());
        }
        if unit.is_giant {
            lines.push("Giant class: stacks poorly with other giants.".to_string());
        }
    }

    if !cov.new_coverage.is_empty() {
        lines.push(format!(
            "Newly covers {} enemy unit(s): {}.",
            cov.new_coverage.len(),
            cov.new_coverage.join(", ")
        ));
    }
    if !cov.overlap_coverage.is_empty() {
        lines.push(format!(
            "Doubles down on {} already-covered unit(s): {}.",
            cov.overlap_coverage.len(),
            cov.overlap_coverage.join(", ")
        ));
    }

    let tier = scorer.kb.tier_of(candidate);
    if !tier.tag().is_empty() {
        lines.push(format!(
            "Rated {} tier, giving it high intrinsic value.",
            tier.tag()
        ));
    }

    if breakdown.enemy_pressure != 0.0 {
        let mut answers: Vec<&str> = roster
            .enemy_units
            .iter()
            .filter(|e| scorer.kb.beats(e, candidate))
            .map(|s| s.as_str())
            .collect();
        answers.sort();
        lines.push(format!(
            "Note: enemy already holds an answer ({}), partly reducing impact.",
            answers.join(", ")
        ));
    }
    if breakdown.struggle_priority != 0.0 {
        lines.push("Directly answers a unit you flagged as a struggle.".to_string());
    }
    if breakdown.opener > 0.0 {
        lines.push("Strong round-1 opener pick.".to_string());
    }

    lines
}
