use crate::geometry::Rect;

use super::frames::{
    BoxShape, CancelWindow, FrameRange, HitboxFrame, HurtboxFrame, MotionFrame, MovementFrame,
    PushboxFrame, StatusFrame, all_at, first_at,
};
use super::ids::{ActionId, AttackId, MotionId, SoundId};

/// Broad category of an action.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionType {
    #[default]
    Movement,
    Attack,
    Damage,
    /// Any action of this type blocks incoming attacks.
    Guard,
}

/// Authored definition of one action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionData {
    pub id: ActionId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub kind: ActionType,
    pub frame_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub looping: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loop_from_frame: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub always_cancelable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sound: Option<SoundId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub motions: Vec<MotionFrame>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Vec<StatusFrame>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hitboxes: Vec<HitboxFrame>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hurtboxes: Vec<HurtboxFrame>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pushboxes: Vec<PushboxFrame>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub movements: Vec<MovementFrame>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cancels: Vec<CancelWindow>,
}

impl ActionData {
    /// Creates an empty action; attach frame data with the `with_*` methods.
    pub fn new(id: ActionId, kind: ActionType, frame_count: u32) -> Self {
        Self {
            id,
            name: String::new(),
            kind,
            frame_count,
            looping: false,
            loop_from_frame: 0,
            always_cancelable: false,
            sound: None,
            motions: Vec::new(),
            status: Vec::new(),
            hitboxes: Vec::new(),
            hurtboxes: Vec::new(),
            pushboxes: Vec::new(),
            movements: Vec::new(),
            cancels: Vec::new(),
        }
    }

    // ===== lookups =====

    /// Whether `frame` has run past the authored length.
    #[inline]
    pub fn is_finished_at(&self, frame: u32) -> bool {
        frame >= self.frame_count
    }

    pub fn motion_at(&self, frame: u32) -> Option<&MotionFrame> {
        first_at(&self.motions, frame)
    }

    pub fn status_at(&self, frame: u32) -> Option<&StatusFrame> {
        first_at(&self.status, frame)
    }

    pub fn hitboxes_at(&self, frame: u32) -> impl Iterator<Item = &HitboxFrame> {
        all_at(&self.hitboxes, frame)
    }

    pub fn hurtboxes_at(&self, frame: u32) -> impl Iterator<Item = &HurtboxFrame> {
        all_at(&self.hurtboxes, frame)
    }

    pub fn pushbox_at(&self, frame: u32) -> Option<&PushboxFrame> {
        first_at(&self.pushboxes, frame)
    }

    pub fn movement_at(&self, frame: u32) -> Option<&MovementFrame> {
        first_at(&self.movements, frame)
    }

    pub fn cancels_at(&self, frame: u32) -> impl Iterator<Item = &CancelWindow> {
        all_at(&self.cancels, frame)
    }

    /// Cancel windows at `frame` that list `target`.
    pub fn cancels_into(
        &self,
        frame: u32,
        target: ActionId,
    ) -> impl Iterator<Item = &CancelWindow> {
        self.cancels_at(frame).filter(move |w| w.allows(target))
    }

    // ===== builder =====

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn looping_from(mut self, loop_from_frame: u32) -> Self {
        self.looping = true;
        self.loop_from_frame = loop_from_frame;
        self
    }

    pub fn always_cancelable(mut self) -> Self {
        self.always_cancelable = true;
        self
    }

    pub fn with_sound(mut self, sound: SoundId) -> Self {
        self.sound = Some(sound);
        self
    }

    pub fn with_motion(mut self, frames: FrameRange, motion: MotionId) -> Self {
        self.motions.push(MotionFrame { frames, motion });
        self
    }

    pub fn with_counter_hit(mut self, frames: FrameRange) -> Self {
        self.status.push(StatusFrame {
            frames,
            counter_hit: true,
        });
        self
    }

    pub fn with_hitbox(mut self, frames: FrameRange, rect: Rect, attack: AttackId) -> Self {
        self.hitboxes.push(HitboxFrame {
            frames,
            rect,
            attack,
            proximity: false,
        });
        self
    }

    pub fn with_proximity_box(mut self, frames: FrameRange, rect: Rect, attack: AttackId) -> Self {
        self.hitboxes.push(HitboxFrame {
            frames,
            rect,
            attack,
            proximity: true,
        });
        self
    }

    pub fn with_hurtbox(mut self, frames: FrameRange, shape: BoxShape) -> Self {
        self.hurtboxes.push(HurtboxFrame { frames, shape });
        self
    }

    pub fn with_pushbox(mut self, frames: FrameRange, shape: BoxShape) -> Self {
        self.pushboxes.push(PushboxFrame { frames, shape });
        self
    }

    /// Base hurtbox and pushbox across the whole action.
    pub fn with_base_body(self) -> Self {
        let all = FrameRange::new(0, self.frame_count);
        self.with_hurtbox(all, BoxShape::Base)
            .with_pushbox(all, BoxShape::Base)
    }

    pub fn with_movement(mut self, frames: FrameRange, velocity_x: f32) -> Self {
        self.movements.push(MovementFrame { frames, velocity_x });
        self
    }

    pub fn with_cancel(mut self, window: CancelWindow) -> Self {
        self.cancels.push(window);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jab() -> ActionData {
        ActionData::new(ActionId::NORMAL_ATTACK, ActionType::Attack, 20)
            .with_base_body()
            .with_hitbox(
                FrameRange::new(4, 6),
                Rect::new(1.0, 0.5, 1.0, 0.5),
                AttackId(1),
            )
            .with_hurtbox(
                FrameRange::new(4, 8),
                BoxShape::Custom(Rect::new(0.8, 0.5, 1.0, 0.5)),
            )
            .with_movement(FrameRange::new(0, 3), 1.5)
            .with_cancel(CancelWindow {
                frames: FrameRange::new(4, 12),
                targets: vec![ActionId::NORMAL_SPECIAL, ActionId::BACK_SPECIAL],
                bufferable: true,
                immediate: false,
            })
    }

    #[test]
    fn single_valued_lookup_is_total_over_covered_frames() {
        let action = jab();
        for frame in 0..action.frame_count {
            assert!(action.pushbox_at(frame).is_some(), "frame {frame}");
        }
    }

    #[test]
    fn multi_valued_lookups_return_every_overlap() {
        let action = jab();
        assert_eq!(action.hurtboxes_at(5).count(), 2);
        assert_eq!(action.hurtboxes_at(9).count(), 1);
        assert_eq!(action.hitboxes_at(3).count(), 0);
        assert_eq!(action.hitboxes_at(6).count(), 1);
    }

    #[test]
    fn cancels_into_filters_by_target() {
        let action = jab();
        assert_eq!(action.cancels_into(5, ActionId::BACK_SPECIAL).count(), 1);
        assert_eq!(action.cancels_into(5, ActionId::FORWARD).count(), 0);
        assert_eq!(action.cancels_into(13, ActionId::BACK_SPECIAL).count(), 0);
    }

    #[test]
    fn finished_at_frame_count() {
        let action = jab();
        assert!(!action.is_finished_at(19));
        assert!(action.is_finished_at(20));
    }
}
