//! Fixed input scripts.

use fight_core::{BattleEngine, InputBits, Side};

use crate::api::InputProvider;

/// Plays a fixed list of inputs, one per call, then holds neutral.
///
/// The script advances on every call regardless of round phase, so a script
/// written for a fresh engine lines up with the engine's frame count.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    script: Vec<InputBits>,
    cursor: usize,
}

impl ScriptedProvider {
    pub fn new(script: Vec<InputBits>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Appends `bits` held for `frames` calls.
    pub fn then(mut self, bits: InputBits, frames: usize) -> Self {
        self.script.extend(std::iter::repeat_n(bits, frames));
        self
    }

    /// Appends `frames` calls of neutral input.
    pub fn wait(self, frames: usize) -> Self {
        self.then(InputBits::empty(), frames)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl InputProvider for ScriptedProvider {
    fn next_input(&mut self, _side: Side, _engine: &BattleEngine) -> InputBits {
        let bits = self.script.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        bits
    }
}
