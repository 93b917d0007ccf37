use tracing::debug;

/// Read-only decision snapshot for one scoring pass: what I field,
/// what the enemy fields, which enemy units I struggle against, and
/// the current round.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub my_units: Vec<String>,
    pub enemy_units: Vec<String>,
    pub struggle_units: Vec<String>,
    pub round: u32,
}

impl Roster {
    /// Normalizes the snapshot: duplicates dropped, struggle units
    /// restricted to the observed enemy roster, round clamped to >= 1.
    pub fn new(
        my_units: Vec<String>,
        enemy_units: Vec<String>,
        struggle_units: Vec<String>,
        round: u32,
    ) -> Self {
        let my_units = dedup(my_units);
        let enemy_units = dedup(enemy_units);
        let struggle_units: Vec<String> = dedup(struggle_units)
            .into_iter()
            .filter(|s| {
                let known = enemy_units.contains(s);
                if !known {
                    debug!("Dropping struggle unit '{}' not in enemy roster", s);
                }
                known
            })
            .collect();
        Self {
            my_units,
            enemy_units,
            struggle_units,
            round: round.max(1),
        }
    }

    pub fn fielded(&self, name: &str) -> bool {
        self.my_units.iter().any(|u| u == name)
    }

    pub fn enemy_has(&self, name: &str) -> bool {
        self.enemy_units.iter().any(|u| u == name)
    }

    pub fn is_empty(&self) -> bool {
        self.my_units.is_empty() && self.enemy_units.is_empty()
    }
}

fn dedup(mut v: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    v.retain(|s| seen.insert(s.clone()));
    v
}
