//! Immutable per-character action tables.
//!
//! An action is a frame-indexed behaviour unit (walk, attack, guard reaction)
//! whose per-frame sub-data is authored offline. The simulation only ever reads
//! these tables; lookups are pure functions of `(action, frame)`.
//!
//! - [`frames`]: frame ranges and the per-category frame records
//! - [`data`]: [`ActionData`] with its frame lookups
//! - [`attack`]: [`AttackDef`] keyed by [`AttackId`]
mod attack;
mod data;
mod frames;
mod ids;

pub use attack::AttackDef;
pub use data::{ActionData, ActionType};
pub use frames::{
    BoxShape, CancelWindow, FrameRange, FrameRecord, HitboxFrame, HurtboxFrame, MotionFrame,
    MovementFrame, PushboxFrame, StatusFrame, all_at, first_at,
};
pub use ids::{ActionId, AttackId, MotionId, SoundId};
