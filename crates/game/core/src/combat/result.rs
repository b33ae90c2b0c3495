use crate::action::AttackId;
use crate::geometry::Vec2;
use crate::state::Side;

/// How a confirmed hit was received.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageResult {
    Damage,
    Guard,
    GuardBreak,
    /// Unblocked hit on a frame flagged as counter-hittable.
    Counter,
}

impl DamageResult {
    #[inline]
    pub fn is_blocked(self) -> bool {
        matches!(self, DamageResult::Guard | DamageResult::GuardBreak)
    }
}

/// One confirmed hit, reported once per attacker per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitEvent {
    pub attacker: Side,
    pub defender: Side,
    pub attack: AttackId,
    /// Centre of the overlap between the hitbox and the hurtbox.
    pub point: Vec2,
    pub result: DamageResult,
    /// Stun applied to both fighters.
    pub stun_frames: u32,
}
