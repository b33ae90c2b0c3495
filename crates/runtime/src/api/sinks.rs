//! Output seams for sound and presentation.
//!
//! The engine only reports what happened; sinks decide how it is shown or
//! heard. Both traits default to doing nothing so a headless run can pass
//! [`NullSink`].
use fight_core::{BattleEngine, HitEvent, RoundPhase, Side, SoundCue};

/// Receives sound cues in the order the engine emitted them.
pub trait AudioSink: Send {
    fn play(&mut self, side: Side, cue: &SoundCue);
}

/// Receives the state to draw after every tick.
pub trait PresentationSink: Send {
    /// Called once per tick with the engine after it advanced.
    fn present(&mut self, engine: &BattleEngine);

    fn on_phase_changed(&mut self, _phase: RoundPhase) {}

    fn on_hit(&mut self, _hit: &HitEvent) {}
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _side: Side, _cue: &SoundCue) {}
}

impl PresentationSink for NullSink {
    fn present(&mut self, _engine: &BattleEngine) {}
}
