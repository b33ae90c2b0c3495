//! Rolling per-fighter input history.
//!
//! Offset 0 is the most recent frame; offset `n` is `n` frames ago. Offsets
//! past the retained length read as no input.

use crate::config::BattleConfig;
use crate::geometry::Facing;

use super::InputBits;

const LEN: usize = BattleConfig::INPUT_HISTORY_FRAMES;

/// Fixed-length ring of raw input plus rising/falling edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputHistory {
    raw: [InputBits; LEN],
    pressed: [InputBits; LEN],
    released: [InputBits; LEN],
    /// Slot holding offset 0.
    head: usize,
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHistory {
    pub const LEN: usize = LEN;

    pub fn new() -> Self {
        Self {
            raw: [InputBits::empty(); LEN],
            pressed: [InputBits::empty(); LEN],
            released: [InputBits::empty(); LEN],
            head: 0,
        }
    }

    /// Shifts the history by one frame and stores `bits` at offset 0.
    pub fn push(&mut self, bits: InputBits) {
        let previous = self.raw[self.head];
        self.head = (self.head + 1) % Self::LEN;
        self.raw[self.head] = bits;
        self.pressed[self.head] = bits & !previous;
        self.released[self.head] = previous & !bits;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn slot(&self, offset: usize) -> Option<usize> {
        (offset < Self::LEN).then(|| (self.head + Self::LEN - offset) % Self::LEN)
    }

    /// Buttons held `offset` frames ago.
    pub fn raw(&self, offset: usize) -> InputBits {
        self.slot(offset)
            .map_or(InputBits::empty(), |slot| self.raw[slot])
    }

    /// Buttons that went down `offset` frames ago.
    pub fn pressed(&self, offset: usize) -> InputBits {
        self.slot(offset)
            .map_or(InputBits::empty(), |slot| self.pressed[slot])
    }

    /// Buttons that came up `offset` frames ago.
    pub fn released(&self, offset: usize) -> InputBits {
        self.slot(offset)
            .map_or(InputBits::empty(), |slot| self.released[slot])
    }

    #[inline]
    pub fn current(&self) -> InputBits {
        self.raw(0)
    }

    /// Attack released this frame after being held for `hold_frames`
    /// consecutive frames before it.
    pub fn special_released(&self, hold_frames: u32) -> bool {
        if !self.released(0).is_attack() {
            return false;
        }
        (1..=hold_frames as usize).all(|offset| self.raw(offset).is_attack())
    }

    /// Double tap toward the facing direction.
    pub fn dash_forward(&self, facing: Facing, allow_frames: u32) -> bool {
        self.double_tap(
            InputBits::forward(facing),
            InputBits::backward(facing),
            allow_frames,
        )
    }

    /// Double tap away from the facing direction.
    pub fn dash_backward(&self, facing: Facing, allow_frames: u32) -> bool {
        self.double_tap(
            InputBits::backward(facing),
            InputBits::forward(facing),
            allow_frames,
        )
    }

    /// `toward` pressed now, an earlier tap of `toward` inside the window with
    /// no `away` in between, and that earlier tap began from neutral within
    /// the window.
    fn double_tap(&self, toward: InputBits, away: InputBits, allow_frames: u32) -> bool {
        if !self.pressed(0).intersects(toward) {
            return false;
        }
        let allow = allow_frames as usize;
        for i in 1..allow {
            let held = self.raw(i);
            if held.intersects(away) {
                return false;
            }
            if held.intersects(toward) {
                return (i + 1..i + allow).any(|j| self.raw(j).is_neutral());
            }
        }
        false
    }
}
