pub mod config;
pub mod error;
pub mod knowledge;
pub mod roster;
pub mod scorer;
pub mod tiers;
// cmd and reports are binary modules (declared in main.rs); the library
// surface stops at the Scorer facade and its inputs.
