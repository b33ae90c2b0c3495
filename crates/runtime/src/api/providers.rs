//! Synchronous abstraction for sourcing per-frame input.
//!
//! Runtime users plug in [`InputProvider`] implementations so the simulation
//! can run with human input, scripted fixtures, recorded logs, or the scripted
//! opponent.
use fight_core::{BattleEngine, BattleEvent, InputBits, Side};

/// Supplies one frame of input for a seat.
///
/// Different implementations can handle:
/// - Player input (from a device layer)
/// - Scripted opponent decisions
/// - Scripted or recorded input
/// - Testing fixtures
pub trait InputProvider: Send {
    /// Input for `side` on the tick about to run.
    ///
    /// `engine` is the state left by the previous tick.
    fn next_input(&mut self, side: Side, engine: &BattleEngine) -> InputBits;

    /// Called for every event the engine emits, after the tick that produced it.
    fn on_round_event(&mut self, _event: &BattleEvent) {}
}

impl<P: InputProvider + ?Sized> InputProvider for Box<P> {
    fn next_input(&mut self, side: Side, engine: &BattleEngine) -> InputBits {
        (**self).next_input(side, engine)
    }

    fn on_round_event(&mut self, event: &BattleEvent) {
        (**self).on_round_event(event)
    }
}

/// A provider that never presses anything.
/// Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleProvider;

impl InputProvider for IdleProvider {
    fn next_input(&mut self, _side: Side, _engine: &BattleEngine) -> InputBits {
        InputBits::empty()
    }
}
