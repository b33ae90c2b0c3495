use crate::combat::DamageResult;

use super::ids::{ActionId, AttackId};

/// Damage, stun and reaction data for one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDef {
    pub id: AttackId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Reaction played by a defender that is hit.
    pub damage_action: ActionId,
    /// Reaction played by a defender that blocks.
    pub guard_action: ActionId,
    /// Distinct hits allowed per activation of the owning action.
    pub hit_count: u32,
    pub vital_damage: i32,
    pub guard_damage: i32,
    pub hit_stun: u32,
    pub guard_stun: u32,
    pub guard_break_stun: u32,
}

impl AttackDef {
    pub fn new(id: AttackId) -> Self {
        Self {
            id,
            name: String::new(),
            damage_action: ActionId::DAMAGE,
            guard_action: ActionId::GUARD_MID,
            hit_count: 1,
            vital_damage: 1,
            guard_damage: 1,
            hit_stun: 0,
            guard_stun: 0,
            guard_break_stun: 0,
        }
    }

    /// Stun frames shared by attacker and defender for the given outcome.
    pub fn stun_for(&self, result: DamageResult) -> u32 {
        match result {
            DamageResult::Guard => self.guard_stun,
            DamageResult::GuardBreak => self.guard_break_stun,
            DamageResult::Damage | DamageResult::Counter => self.hit_stun,
        }
    }

    pub fn with_hit_count(mut self, hit_count: u32) -> Self {
        self.hit_count = hit_count;
        self
    }

    pub fn with_damage(mut self, vital: i32, guard: i32) -> Self {
        self.vital_damage = vital;
        self.guard_damage = guard;
        self
    }

    pub fn with_stun(mut self, hit: u32, guard: u32, guard_break: u32) -> Self {
        self.hit_stun = hit;
        self.guard_stun = guard;
        self.guard_break_stun = guard_break;
        self
    }

    pub fn with_reactions(mut self, damage_action: ActionId, guard_action: ActionId) -> Self {
        self.damage_action = damage_action;
        self.guard_action = guard_action;
        self
    }
}
