use core::fmt;

/// Identifier of an action in a fighter's action table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionId(pub u32);

impl ActionId {
    pub const STAND: Self = Self(0);
    pub const FORWARD: Self = Self(1);
    pub const BACKWARD: Self = Self(2);
    pub const DASH_FORWARD: Self = Self(10);
    pub const DASH_BACKWARD: Self = Self(11);
    pub const NORMAL_ATTACK: Self = Self(100);
    pub const BACK_ATTACK: Self = Self(105);
    pub const NORMAL_SPECIAL: Self = Self(110);
    pub const BACK_SPECIAL: Self = Self(115);
    pub const DAMAGE: Self = Self(200);
    pub const GUARD_MID: Self = Self(301);
    pub const GUARD_STAND: Self = Self(305);
    pub const GUARD_CROUCH: Self = Self(306);
    pub const GUARD_BREAK: Self = Self(310);
    pub const GUARD_PROXIMITY: Self = Self(350);
    pub const DEAD: Self = Self(500);
    pub const WIN: Self = Self(510);

    #[inline]
    pub const fn is_normal_attack(self) -> bool {
        self.0 == Self::NORMAL_ATTACK.0 || self.0 == Self::BACK_ATTACK.0
    }

    #[inline]
    pub const fn is_special_attack(self) -> bool {
        self.0 == Self::NORMAL_SPECIAL.0 || self.0 == Self::BACK_SPECIAL.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// Identifier of an [`crate::action::AttackDef`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttackId(pub u32);

impl fmt::Display for AttackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attack#{}", self.0)
    }
}

/// Sprite/motion handle resolved by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MotionId(pub u32);

/// Sound handle resolved by the audio layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SoundId(pub u32);
