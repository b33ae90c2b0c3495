use bitflags::bitflags;

use crate::geometry::Facing;

bitflags! {
    /// Buttons held on one frame.
    ///
    /// Directions are absolute; [`InputBits::forward`] and
    /// [`InputBits::backward`] translate them relative to a facing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct InputBits: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const ATTACK = 1 << 2;
    }
}

impl InputBits {
    /// Direction bit pointing the way `facing` looks.
    #[inline]
    pub const fn forward(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::RIGHT,
            Facing::Left => Self::LEFT,
        }
    }

    #[inline]
    pub const fn backward(facing: Facing) -> Self {
        match facing {
            Facing::Right => Self::LEFT,
            Facing::Left => Self::RIGHT,
        }
    }

    #[inline]
    pub fn is_forward(self, facing: Facing) -> bool {
        self.intersects(Self::forward(facing))
    }

    #[inline]
    pub fn is_backward(self, facing: Facing) -> bool {
        self.intersects(Self::backward(facing))
    }

    #[inline]
    pub fn is_attack(self) -> bool {
        self.intersects(Self::ATTACK)
    }

    /// Neither direction held.
    #[inline]
    pub fn is_neutral(self) -> bool {
        !self.intersects(Self::LEFT | Self::RIGHT)
    }
}

/// One captured input sample with its round-relative timestamp in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputFrame {
    pub bits: InputBits,
    pub time: f32,
}

impl InputFrame {
    pub const fn new(bits: InputBits, time: f32) -> Self {
        Self { bits, time }
    }
}
