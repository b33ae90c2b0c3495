//! Axis-aligned boxes shared by hitboxes, hurtboxes and pushboxes.
//!
//! A [`Rect`] is anchored at the horizontal centre of its bottom edge: `x` is
//! the centre line and `y` the floor the box stands on, so a box authored at
//! `y = 0` sits on the ground and grows upward.

use crate::action::AttackId;

/// World-space point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which way a fighter is looking. Authored box x offsets and walk speeds are
/// expressed relative to facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// `+1.0` when facing right, `-1.0` when facing left.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    #[inline]
    pub const fn is_right(self) -> bool {
        matches!(self, Facing::Right)
    }
}

/// Axis-aligned rectangle with bottom-centre anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn x_min(&self) -> f32 {
        self.x - self.width / 2.0
    }

    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn y_min(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Non-strict AABB intersection: touching edges count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x_max() >= self.x_min()
            && other.x_min() <= self.x_max()
            && other.y_max() >= self.y_min()
            && other.y_min() <= self.y_max()
    }

    /// Centre of the overlapping region of two rectangles.
    ///
    /// Only meaningful when [`Rect::overlaps`] holds.
    pub fn overlap_center(&self, other: &Rect) -> Vec2 {
        let x1 = self.x_max().min(other.x_max());
        let x2 = self.x_min().max(other.x_min());
        let y1 = self.y_max().min(other.y_max());
        let y2 = self.y_min().max(other.y_min());
        Vec2::new((x1 + x2) / 2.0, (y1 + y2) / 2.0)
    }

    /// Converts a fighter-local rectangle into world space.
    ///
    /// The local x offset is mirrored when the fighter faces left.
    pub fn to_world(&self, origin: Vec2, facing: Facing) -> Rect {
        Rect {
            x: origin.x + self.x * facing.sign(),
            y: origin.y + self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

/// Active damage region of an attacker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitbox {
    pub rect: Rect,
    pub attack_id: AttackId,
    /// Proximity boxes never deal damage; they only let the defender raise a guard.
    pub proximity: bool,
}

/// Region that can receive damage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hurtbox {
    pub rect: Rect,
}

/// Body used for separation between fighters and against the stage edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pushbox {
    pub rect: Rect,
}
