use crate::error::MfResult;
use crate::knowledge::KnowledgeBase;
use crate::tiers::Tier;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// One entry of the counters document. The scraper also stores
/// guide text and image URLs under the same key; those are ignored.
#[derive(Debug, Deserialize, Default)]
pub struct CounterEntry {
    #[serde(default)]
    pub countered_by: Vec<String>,
    #[serde(default)]
    pub used_against: Vec<String>,
}

/// One entry of the metadata document.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct UnitMeta {
    pub cost: u32,
    #[serde(default)]
    pub unlock_cost: u32,
    #[serde(default)]
    pub titan: bool,
    #[serde(default)]
    pub giant: bool,
}

pub fn read_counters<R: Read>(reader: R) -> MfResult<HashMap<String, (Vec<String>, Vec<String>)>> {
    let raw: HashMap<String, CounterEntry> = serde_json::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|(name, e)| (name, (e.countered_by, e.used_against)))
        .collect())
}

pub fn read_tiers<R: Read>(reader: R) -> MfResult<HashMap<String, Tier>> {
    let raw: HashMap<String, String> = serde_json::from_reader(reader)?;
    Ok(raw
        .into_iter()
        .map(|(name, letter)| (name, Tier::parse_lossy(&letter)))
        .collect())
}

pub fn read_metadata<R: Read>(reader: R) -> MfResult<HashMap<String, UnitMeta>> {
    Ok(serde_json::from_reader(reader)?)
}

// Per-source failures are recoverable: the engine runs on whatever
// subset of the documents loaded, so a bad file degrades to an empty
// table instead of aborting the session.
fn load_or_empty<T, F>(path: &Path, what: &str, parse: F) -> T
where
    T: Default,
    F: FnOnce(File) -> MfResult<T>,
{
    match File::open(path) {
        Ok(file) => match parse(file) {
            Ok(table) => table,
            Err(e) => {
                warn!("Malformed {} document at {:?}: {}", what, path, e);
                T::default()
            }
        },
        Err(e) => {
            warn!("Could not open {} document at {:?}: {}", what, path, e);
            T::default()
        }
    }
}

/// Load the three reference documents and merge them into a
/// `KnowledgeBase`. Missing or malformed documents degrade to empty
/// tables; only the merged result is reported.
pub fn load_documents<P: AsRef<Path>>(
    counters_path: P,
    tiers_path: P,
    metadata_path: P,
    default_cost: u32,
    default_unlock_cost: u32,
) -> KnowledgeBase {
    debug!(
        "Loading reference data: counters={:?} tiers={:?} metadata={:?}",
        counters_path.as_ref(),
        tiers_path.as_ref(),
        metadata_path.as_ref()
    );

    let counters = load_or_empty(counters_path.as_ref(), "counters", read_counters);
    let tiers = load_or_empty(tiers_path.as_ref(), "tier", read_tiers);
    let metadata = load_or_empty(metadata_path.as_ref(), "metadata", read_metadata);

    let kb = KnowledgeBase::from_parts(
        counters,
        tiers,
        metadata,
        default_cost,
        default_unlock_cost,
    );
    info!("Knowledge base ready: {} units", kb.len());
    kb
}
