//! Playback of a saved replay log as live input.

use fight_core::{BattleEngine, InputBits, RoundPhase, Side};

use crate::api::InputProvider;
use crate::repository::ReplayLog;

/// Feeds one seat of a [`ReplayLog`] back into a fresh round.
///
/// Frames are consumed only on ticks that capture input (intro and fight),
/// so starting the provider before the round's first intro lines the log up
/// with the engine's recording. Once exhausted it holds neutral.
#[derive(Clone, Debug)]
pub struct ReplayProvider {
    bits: Vec<InputBits>,
    cursor: usize,
}

impl ReplayProvider {
    pub fn new(log: &ReplayLog, side: Side) -> Self {
        Self {
            bits: log.bits(side).collect(),
            cursor: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.bits.len()
    }
}

impl InputProvider for ReplayProvider {
    fn next_input(&mut self, _side: Side, engine: &BattleEngine) -> InputBits {
        if !matches!(engine.phase(), RoundPhase::Intro | RoundPhase::Fight) {
            return InputBits::empty();
        }
        let bits = self.bits.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        bits
    }
}
