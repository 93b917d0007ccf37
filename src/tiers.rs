use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// Community tier letter for a unit. `Unranked` is the total-function
/// fallback for units absent from the tier document.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    Unranked,
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Unranked
    }
}

impl Tier {
    /// Scoring ordinal: S=4 down to D=0. Unranked scores like D.
    pub fn ordinal(&self) -> u32 {
        match self {
            Tier::S => 4,
            Tier::A => 3,
            Tier::B => 2,
            Tier::C => 1,
            Tier::D | Tier::Unranked => 0,
        }
    }

    /// Sort key for tier-weighted boards. Unranked sits below D so a
    /// ranked unit always wins the tie-break against an unranked one.
    pub fn board_rank(&self) -> i32 {
        match self {
            Tier::Unranked => -1,
            t => t.ordinal() as i32,
        }
    }

    /// Total parse: anything that is not a known letter becomes
    /// `Unranked` with a warning, never an error.
    pub fn parse_lossy(raw: &str) -> Tier {
        match Tier::from_str(raw.trim()) {
            Ok(t) => t,
            Err(_) => {
                if !raw.trim().is_empty() {
                    warn!("Unknown tier letter '{}', treating as unranked", raw);
                }
                Tier::Unranked
            }
        }
    }

    /// Display tag for reports; empty for unranked units.
    pub fn tag(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::Unranked => "",
        }
    }
}
