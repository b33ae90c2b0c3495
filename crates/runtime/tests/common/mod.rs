#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use fight_content::{bundled_config, bundled_fighter};
use fight_core::{
    ActionId, BattleConfig, BattleEngine, FighterData, HitEvent, InputBits, RoundPhase, Side,
    SoundCue,
};
use fight_runtime::{AudioSink, InputProvider, PresentationSink};

/// Bundled config with one-frame phases and a single round.
pub fn quick_config() -> BattleConfig {
    bundled_config()
        .unwrap()
        .with_phase_frames(1, 1, 1)
        .with_rounds_to_win(1)
}

pub fn ronin() -> Arc<FighterData> {
    Arc::new(bundled_fighter().unwrap())
}

/// Walks towards the opponent and pokes once in range.
pub struct WalkAndPoke;

impl InputProvider for WalkAndPoke {
    fn next_input(&mut self, side: Side, engine: &BattleEngine) -> InputBits {
        let me = engine.fighter(side);
        let gap = (engine.fighter(side.opponent()).position.x - me.position.x).abs();
        if engine.phase() != RoundPhase::Fight || me.action_id() == ActionId::NORMAL_ATTACK {
            InputBits::empty()
        } else if gap < 1.5 {
            InputBits::ATTACK
        } else {
            InputBits::forward(me.facing)
        }
    }
}

#[derive(Clone, Default)]
pub struct Recorder {
    pub sounds: Arc<Mutex<Vec<(Side, SoundCue)>>>,
    pub hits: Arc<Mutex<Vec<HitEvent>>>,
    pub phases: Arc<Mutex<Vec<RoundPhase>>>,
    pub frames: Arc<Mutex<u64>>,
}

impl AudioSink for Recorder {
    fn play(&mut self, side: Side, cue: &SoundCue) {
        self.sounds.lock().unwrap().push((side, *cue));
    }
}

impl PresentationSink for Recorder {
    fn present(&mut self, _engine: &BattleEngine) {
        *self.frames.lock().unwrap() += 1;
    }

    fn on_phase_changed(&mut self, phase: RoundPhase) {
        self.phases.lock().unwrap().push(phase);
    }

    fn on_hit(&mut self, hit: &HitEvent) {
        self.hits.lock().unwrap().push(*hit);
    }
}
