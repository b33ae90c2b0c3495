//! Deterministic per-frame combat simulation for a two-fighter duel.
//!
//! `fight-core` holds the canonical rules: authored action tables
//! ([`action`]), box geometry ([`geometry`]), input history ([`input`]), the
//! per-fighter state machine ([`state`]), box interaction ([`combat`]) and
//! the round orchestrator ([`engine::BattleEngine`]). Character data reaches
//! the simulation through the read-only oracles in [`env`]. The crate does no
//! I/O; loaders and drivers live in `fight-content` and `fight-runtime`.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod input;
pub mod state;

#[cfg(test)]
mod test_support;

pub use action::{
    ActionData, ActionId, ActionType, AttackDef, AttackId, BoxShape, CancelWindow, FrameRange,
    MotionId, SoundId,
};
pub use combat::{DamageResult, HitEvent};
pub use config::BattleConfig;
pub use engine::{BattleEngine, BattleEvent, InputRecorder};
pub use env::{FighterData, FighterOracle, FighterProfile, OracleError};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Facing, Hitbox, Hurtbox, Pushbox, Rect, Vec2};
pub use input::{InputBits, InputFrame, InputHistory};
pub use state::{FighterState, RoundPhase, Side, SoundCue};
