//! Frame ranges and per-frame records.
//!
//! Every record covers an inclusive `[start, end]` frame range. Hit, hurt and
//! cancel records may overlap; the remaining categories hold at most one record
//! per frame, which is the author's responsibility and not checked here.

use crate::geometry::Rect;

use super::ids::{ActionId, AttackId, MotionId};

/// Inclusive frame range `[start, end]`.
///
/// Serialized as a `(start, end)` pair to keep authored tables compact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(u32, u32)", into = "(u32, u32)"))]
pub struct FrameRange {
    pub start: u32,
    pub end: u32,
}

impl FrameRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Range covering a single frame.
    pub const fn single(frame: u32) -> Self {
        Self::new(frame, frame)
    }

    #[inline]
    pub const fn contains(&self, frame: u32) -> bool {
        frame >= self.start && frame <= self.end
    }
}

impl From<(u32, u32)> for FrameRange {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}

impl From<FrameRange> for (u32, u32) {
    fn from(range: FrameRange) -> Self {
        (range.start, range.end)
    }
}

/// Common access to the frame range of any record.
pub trait FrameRecord {
    fn frames(&self) -> FrameRange;
}

/// First record whose range contains `frame`.
pub fn first_at<R: FrameRecord>(records: &[R], frame: u32) -> Option<&R> {
    records.iter().find(|r| r.frames().contains(frame))
}

/// All records whose range contains `frame`, in authored order.
pub fn all_at<R: FrameRecord>(records: &[R], frame: u32) -> impl Iterator<Item = &R> {
    records.iter().filter(move |r| r.frames().contains(frame))
}

/// Either an authored rectangle or the character-wide base rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxShape {
    /// Use the fighter profile's base hurtbox/pushbox.
    Base,
    Custom(Rect),
}

impl BoxShape {
    /// Resolves to a concrete fighter-local rectangle.
    #[inline]
    pub fn resolve(&self, base: Rect) -> Rect {
        match self {
            BoxShape::Base => base,
            BoxShape::Custom(rect) => *rect,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionFrame {
    pub frames: FrameRange,
    pub motion: MotionId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFrame {
    pub frames: FrameRange,
    /// Hits landing on these frames are reported as counter hits.
    pub counter_hit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitboxFrame {
    pub frames: FrameRange,
    /// Fighter-local rectangle; x is mirrored when facing left.
    pub rect: Rect,
    pub attack: AttackId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub proximity: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HurtboxFrame {
    pub frames: FrameRange,
    pub shape: BoxShape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushboxFrame {
    pub frames: FrameRange,
    pub shape: BoxShape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementFrame {
    pub frames: FrameRange,
    /// Units per second along the facing direction.
    pub velocity_x: f32,
}

/// Frames during which the owning action may be cancelled into `targets`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CancelWindow {
    pub frames: FrameRange,
    pub targets: Vec<ActionId>,
    /// A request is stored as the pending buffered action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bufferable: bool,
    /// A request is accepted right away (and stored as buffered).
    #[cfg_attr(feature = "serde", serde(default))]
    pub immediate: bool,
}

impl CancelWindow {
    #[inline]
    pub fn allows(&self, target: ActionId) -> bool {
        self.targets.contains(&target)
    }
}

macro_rules! impl_frame_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FrameRecord for $ty {
                #[inline]
                fn frames(&self) -> FrameRange {
                    self.frames
                }
            }
        )*
    };
}

impl_frame_record!(
    MotionFrame,
    StatusFrame,
    HitboxFrame,
    HurtboxFrame,
    PushboxFrame,
    MovementFrame,
    CancelWindow,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        let range = FrameRange::new(2, 4);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn first_at_returns_first_match() {
        let records = [
            MovementFrame {
                frames: FrameRange::new(0, 3),
                velocity_x: 1.0,
            },
            MovementFrame {
                frames: FrameRange::new(2, 5),
                velocity_x: 2.0,
            },
        ];
        assert_eq!(first_at(&records, 2).map(|m| m.velocity_x), Some(1.0));
        assert_eq!(first_at(&records, 5).map(|m| m.velocity_x), Some(2.0));
        assert!(first_at(&records, 6).is_none());
    }

    #[test]
    fn all_at_collects_overlapping_records() {
        let windows = [
            CancelWindow {
                frames: FrameRange::new(0, 10),
                targets: vec![ActionId::NORMAL_SPECIAL],
                bufferable: true,
                immediate: false,
            },
            CancelWindow {
                frames: FrameRange::new(5, 6),
                targets: vec![ActionId::BACK_SPECIAL],
                bufferable: false,
                immediate: true,
            },
        ];
        assert_eq!(all_at(&windows, 5).count(), 2);
        assert_eq!(all_at(&windows, 7).count(), 1);
        assert_eq!(all_at(&windows, 11).count(), 0);
    }

    #[test]
    fn base_shape_resolves_to_base_rect() {
        let base = Rect::new(0.0, 0.0, 1.0, 2.0);
        let custom = Rect::new(0.5, 0.0, 0.5, 0.5);
        assert_eq!(BoxShape::Base.resolve(base), base);
        assert_eq!(BoxShape::Custom(custom).resolve(base), custom);
    }
}
