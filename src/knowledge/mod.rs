pub mod loader;

use crate::tiers::Tier;
use std::collections::{HashMap, HashSet};

/// Immutable reference record for one unit. Built once at load,
/// never mutated during a scoring session.
#[derive(Debug, Clone, Default)]
pub struct UnitData {
    pub name: String,
    /// Units that beat this unit.
    pub countered_by: HashSet<String>,
    /// Units this unit is commonly deployed against.
    pub used_against: HashSet<String>,
    pub tier: Tier,
    pub cost: u32,
    pub unlock_cost: u32,
    pub is_titan: bool,
    pub is_giant: bool,
}

/// Normalized in-memory view over the scraped reference documents.
///
/// Every accessor is total: unknown names resolve to documented
/// defaults (empty relations, `Unranked`, defaulted cost), never an
/// error. Partial data is the expected steady state.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    units: HashMap<String, UnitData>,
}

impl KnowledgeBase {
    pub fn lookup(&self, name: &str) -> Option<&UnitData> {
        self.units.get(name)
    }

    /// All known unit names, sorted for deterministic iteration.
    pub fn unit_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.units.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Tier with the unranked default applied.
    pub fn tier_of(&self, name: &str) -> Tier {
        self.units.get(name).map(|u| u.tier).unwrap_or_default()
    }

    /// Does `attacker` beat `target`? True when either direction of
    /// the relation records it.
    pub fn beats(&self, attacker: &str, target: &str) -> bool {
        let forward = self
            .units
            .get(target)
            .map(|u| u.countered_by.contains(attacker))
            .unwrap_or(false);
        let reverse = self
            .units
            .get(attacker)
            .map(|u| u.used_against.contains(target))
            .unwrap_or(false);
        forward || reverse
    }

    /// Strict `countered_by` membership, the relation coverage is
    /// defined over.
    pub fn counters(&self, attacker: &str, target: &str) -> bool {
        self.units
            .get(target)
            .map(|u| u.countered_by.contains(attacker))
            .unwrap_or(false)
    }

    /// Construct from already-parsed tables. Self-references are
    /// dropped here so a unit never counters itself.
    pub fn from_parts(
        counters: HashMap<String, (Vec<String>, Vec<String>)>,
        tiers: HashMap<String, Tier>,
        metadata: HashMap<String, loader::UnitMeta>,
        default_cost: u32,
        default_unlock_cost: u32,
    ) -> Self {
        let mut names: HashSet<String> = HashSet::new();
        names.extend(counters.keys().cloned());
        names.extend(tiers.keys().cloned());
        names.extend(metadata.keys().cloned());

        let mut units = HashMap::with_capacity(names.len());
        for name in names {
            let (countered_by, used_against) = counters
                .get(&name)
                .map(|(cb, ua)| {
                    (
                        cb.iter().filter(|n| **n != name).cloned().collect(),
                        ua.iter().filter(|n| **n != name).cloned().collect(),
                    )
                })
                .unwrap_or_default();

            let meta = metadata.get(&name);
            let unit = UnitData {
                name: name.clone(),
                countered_by,
                used_against,
                tier: tiers.get(&name).copied().unwrap_or_default(),
                cost: meta.map(|m| m.cost).unwrap_or(default_cost),
                unlock_cost: meta.map(|m| m.unlock_cost).unwrap_or(default_unlock_cost),
                is_titan: meta.map(|m| m.titan).unwrap_or(false),
                is_giant: meta.map(|m| m.giant).unwrap_or(false),
            };
            units.insert(name, unit);
        }
        Self { units }
    }
}
