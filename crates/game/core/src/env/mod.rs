//! Traits describing read-only fighter data.
//!
//! Oracles expose the per-character action tables, attack definitions and
//! tuning profile. They are loaded once before a match and never mutated
//! during simulation; the engine reaches them through shared references.
mod error;
mod fighter;

pub use error::OracleError;
pub use fighter::{FighterData, FighterOracle, FighterProfile};
