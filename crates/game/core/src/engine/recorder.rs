//! Round input recording and replay.
//!
//! The recorder keeps the inputs of the round in progress and a copy of the
//! last finished round. Replay reads the copy back frame by frame, so a round
//! replayed from its intro reproduces the original run exactly.

use crate::input::{InputBits, InputFrame};
use crate::state::Side;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputRecorder {
    capacity: usize,
    recording: [Vec<InputFrame>; 2],
    last_round: [Vec<InputFrame>; 2],
    replaying: bool,
    replay_cursor: usize,
    overflowed: bool,
}

impl InputRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recording: [Vec::new(), Vec::new()],
            last_round: [Vec::new(), Vec::new()],
            replaying: false,
            replay_cursor: 0,
            overflowed: false,
        }
    }

    /// Discards the in-progress recording.
    pub fn start_round(&mut self) {
        for side in &mut self.recording {
            side.clear();
        }
        self.overflowed = false;
    }

    /// Appends one frame for both sides; frames past capacity are dropped.
    ///
    /// Also advances the replay cursor while replaying.
    pub fn record(&mut self, frames: [InputFrame; 2]) {
        if self.replaying && self.replay_cursor < self.last_round_len() {
            self.replay_cursor += 1;
        }

        if self.recording[0].len() >= self.capacity {
            if !self.overflowed {
                tracing::debug!(capacity = self.capacity, "input recording full, dropping frames");
                self.overflowed = true;
            }
            return;
        }
        for (side, frame) in self.recording.iter_mut().zip(frames) {
            side.push(frame);
        }
    }

    /// Promotes the in-progress recording to the last round and stops replay.
    pub fn finish_round(&mut self) {
        self.last_round = std::mem::take(&mut self.recording);
        self.replaying = false;
        self.replay_cursor = 0;
    }

    /// Starts replaying the last finished round from its first frame.
    ///
    /// Returns `false` when there is nothing to replay.
    pub fn start_replay(&mut self) -> bool {
        if self.last_round_len() == 0 {
            return false;
        }
        self.replaying = true;
        self.replay_cursor = 0;
        true
    }

    /// Input for `side` at the replay cursor. Neutral once the log runs out.
    pub fn replay_frame(&self, side: Side) -> InputFrame {
        self.last_round[side.index()]
            .get(self.replay_cursor)
            .copied()
            .unwrap_or(InputFrame::new(InputBits::empty(), 0.0))
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    pub fn replay_cursor(&self) -> usize {
        self.replay_cursor
    }

    pub fn recorded_len(&self) -> usize {
        self.recording[0].len()
    }

    pub fn last_round_len(&self) -> usize {
        self.last_round[0].len()
    }

    pub fn last_round(&self, side: Side) -> &[InputFrame] {
        &self.last_round[side.index()]
    }
}
