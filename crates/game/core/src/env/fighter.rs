use std::collections::BTreeMap;

use crate::action::{ActionData, ActionId, AttackDef, AttackId};
use crate::error::GameError;
use crate::geometry::Rect;

use super::OracleError;

/// Read-only access to one character's tables.
///
/// The engine only ever reads through this trait, so tests and tools can
/// provide tables from any source.
pub trait FighterOracle: Send + Sync {
    fn profile(&self) -> &FighterProfile;

    fn action(&self, id: ActionId) -> Option<&ActionData>;

    fn attack(&self, id: AttackId) -> Option<&AttackDef>;

    /// Same as [`FighterOracle::action`] but as a typed error.
    fn try_action(&self, id: ActionId) -> Result<&ActionData, OracleError> {
        self.action(id).ok_or(OracleError::ActionNotFound(id))
    }

    fn try_attack(&self, id: AttackId) -> Result<&AttackDef, OracleError> {
        self.attack(id).ok_or(OracleError::AttackNotFound(id))
    }
}

/// Per-character tuning shared by every action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FighterProfile {
    pub start_vital_health: i32,
    pub start_guard_health: i32,
    /// Walk speeds in units per second.
    pub forward_speed: f32,
    pub backward_speed: f32,
    /// Look-back window for the double-tap dash motion.
    pub dash_allow_frames: u32,
    /// Frames attack must be held before a release triggers a special.
    pub special_hold_frames: u32,
    /// Allows a buffered cancel to commit even when the attack whiffed.
    pub cancel_on_whiff: bool,
    pub base_hurtbox: Rect,
    pub base_pushbox: Rect,
}

impl FighterProfile {
    pub const DEFAULT_VITAL_HEALTH: i32 = 1;
    pub const DEFAULT_GUARD_HEALTH: i32 = 3;
    pub const DEFAULT_FORWARD_SPEED: f32 = 2.2;
    pub const DEFAULT_BACKWARD_SPEED: f32 = 1.8;
    pub const DEFAULT_DASH_ALLOW_FRAMES: u32 = 10;
    pub const DEFAULT_SPECIAL_HOLD_FRAMES: u32 = 60;
}

impl Default for FighterProfile {
    fn default() -> Self {
        Self {
            start_vital_health: Self::DEFAULT_VITAL_HEALTH,
            start_guard_health: Self::DEFAULT_GUARD_HEALTH,
            forward_speed: Self::DEFAULT_FORWARD_SPEED,
            backward_speed: Self::DEFAULT_BACKWARD_SPEED,
            dash_allow_frames: Self::DEFAULT_DASH_ALLOW_FRAMES,
            special_hold_frames: Self::DEFAULT_SPECIAL_HOLD_FRAMES,
            cancel_on_whiff: false,
            base_hurtbox: Rect::new(0.0, 0.0, 0.8, 1.6),
            base_pushbox: Rect::new(0.0, 0.0, 0.6, 1.4),
        }
    }
}

/// Immutable tables for one character, keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterData {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: FighterProfile,
    pub actions: BTreeMap<ActionId, ActionData>,
    pub attacks: BTreeMap<AttackId, AttackDef>,
}

impl FighterData {
    /// Builds the id-keyed tables from authored lists.
    ///
    /// Duplicate ids are logged and the later entry wins.
    pub fn from_parts(
        name: impl Into<String>,
        profile: FighterProfile,
        actions: impl IntoIterator<Item = ActionData>,
        attacks: impl IntoIterator<Item = AttackDef>,
    ) -> Self {
        let name = name.into();
        let mut action_table = BTreeMap::new();
        for action in actions {
            let id = action.id;
            if action_table.insert(id, action).is_some() {
                OracleError::DuplicateAction(id).log();
            }
        }
        let mut attack_table = BTreeMap::new();
        for attack in attacks {
            let id = attack.id;
            if attack_table.insert(id, attack).is_some() {
                OracleError::DuplicateAttack(id).log();
            }
        }
        Self {
            name,
            profile,
            actions: action_table,
            attacks: attack_table,
        }
    }

    /// Inert data with no tables; every lookup misses.
    pub fn empty(name: impl Into<String>) -> Self {
        let name = name.into();
        OracleError::TablesNotAvailable(name.clone()).log();
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FighterOracle for FighterData {
    fn profile(&self) -> &FighterProfile {
        &self.profile
    }

    fn action(&self, id: ActionId) -> Option<&ActionData> {
        self.actions.get(&id)
    }

    fn attack(&self, id: AttackId) -> Option<&AttackDef> {
        self.attacks.get(&id)
    }
}
