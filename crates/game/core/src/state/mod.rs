//! Mutable per-match state.
//!
//! [`FighterState`] is the per-combatant state machine. The round orchestrator
//! in [`crate::engine`] owns both fighters and is the only writer.
mod fighter;
mod side;

pub use fighter::{FighterState, SoundCue};
pub use side::{RoundPhase, Side};
