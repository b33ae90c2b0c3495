//! Interaction between the two fighters' boxes.
//!
//! Every function here works on already-refreshed world-space boxes and only
//! moves fighters along x. Hit application itself lives on
//! [`crate::state::FighterState`]; this module decides who touched whom.

mod collision;
mod result;

pub use collision::{Contact, clamp_to_stage, detect_contact, resolve_push, touches_proximity};
pub use result::{DamageResult, HitEvent};
