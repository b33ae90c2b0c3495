#![allow(dead_code)]

use std::sync::Arc;

use fight_core::{
    ActionData, ActionId, ActionType, AttackDef, AttackId, BattleConfig, BattleEngine,
    BattleEvent, FighterData, FighterProfile, FrameRange, InputBits, MotionId, Rect, RoundPhase,
    Side,
};

pub const JAB: AttackId = AttackId(1);
pub const PROXIMITY: AttackId = AttackId(20);

pub const NONE: InputBits = InputBits::empty();
pub const LEFT: InputBits = InputBits::LEFT;
pub const RIGHT: InputBits = InputBits::RIGHT;
pub const ATTACK: InputBits = InputBits::ATTACK;

/// Tuning knobs for the test character.
#[derive(Clone, Copy)]
pub struct Roster {
    pub vital_health: i32,
    pub guard_health: i32,
    pub jab_hits: u32,
    pub jab_length: u32,
    pub jab_active: FrameRange,
    pub hit_stun: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            vital_health: 3,
            guard_health: 3,
            jab_hits: 1,
            jab_length: 120,
            jab_active: FrameRange::new(0, 99),
            hit_stun: 10,
        }
    }
}

impl Roster {
    pub fn build(self) -> FighterData {
        let body = |id: ActionId, kind: ActionType, frames: u32| {
            ActionData::new(id, kind, frames)
                .with_base_body()
                .with_motion(FrameRange::new(0, frames), MotionId(id.0))
        };
        let idle = |id: ActionId| body(id, ActionType::Movement, 30).looping_from(0).always_cancelable();

        let actions = [
            idle(ActionId::STAND),
            idle(ActionId::FORWARD),
            idle(ActionId::BACKWARD),
            body(ActionId::DASH_FORWARD, ActionType::Movement, 12)
                .with_movement(FrameRange::new(0, 8), 5.0),
            body(ActionId::DASH_BACKWARD, ActionType::Movement, 12)
                .with_movement(FrameRange::new(0, 8), -5.0),
            body(ActionId::NORMAL_ATTACK, ActionType::Attack, self.jab_length).with_hitbox(
                self.jab_active,
                Rect::new(1.0, 0.0, 1.0, 1.0),
                JAB,
            ),
            // Proximity box reaches across the whole starting gap.
            body(ActionId::BACK_ATTACK, ActionType::Attack, 20).with_proximity_box(
                FrameRange::new(0, 19),
                Rect::new(2.5, 0.0, 5.0, 1.5),
                PROXIMITY,
            ),
            body(ActionId::NORMAL_SPECIAL, ActionType::Attack, 30),
            body(ActionId::BACK_SPECIAL, ActionType::Attack, 30),
            body(ActionId::DAMAGE, ActionType::Damage, 20),
            body(ActionId::GUARD_MID, ActionType::Guard, 20),
            body(ActionId::GUARD_BREAK, ActionType::Damage, 30),
            body(ActionId::GUARD_PROXIMITY, ActionType::Guard, 10),
            body(ActionId::WIN, ActionType::Movement, 40).looping_from(20),
        ];
        let attacks = [
            AttackDef::new(JAB)
                .with_hit_count(self.jab_hits)
                .with_damage(1, 1)
                .with_stun(self.hit_stun, 6, 20),
            AttackDef::new(PROXIMITY).with_hit_count(u32::MAX),
        ];

        let profile = FighterProfile {
            start_vital_health: self.vital_health,
            start_guard_health: self.guard_health,
            ..FighterProfile::default()
        };
        FighterData::from_parts("tester", profile, actions, attacks)
    }
}

pub fn quick_config() -> BattleConfig {
    BattleConfig::default().with_phase_frames(1, 2, 3)
}

pub fn engine_with(config: BattleConfig, roster: Roster) -> BattleEngine {
    let data = Arc::new(roster.build());
    BattleEngine::new(config, [data.clone(), data])
}

/// Ticks with neutral input until `phase` is entered.
pub fn run_until(engine: &mut BattleEngine, phase: RoundPhase, limit: usize) {
    for _ in 0..limit {
        if engine.phase() == phase {
            return;
        }
        engine.tick([NONE, NONE]);
    }
    panic!("phase {phase} not reached within {limit} ticks");
}

/// Ticks once and returns the hit events only.
pub fn hits(engine: &mut BattleEngine, input: [InputBits; 2]) -> Vec<fight_core::HitEvent> {
    engine
        .tick(input)
        .iter()
        .filter_map(BattleEvent::as_hit)
        .copied()
        .collect()
}

/// Comparable per-fighter state for determinism checks.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub phase: RoundPhase,
    pub action: ActionId,
    pub frame: u32,
    pub x_bits: u32,
    pub vital: i32,
    pub guard: i32,
    pub hit_stun: u32,
}

pub fn snapshot(engine: &BattleEngine) -> [Snapshot; 2] {
    Side::BOTH.map(|side| {
        let f = engine.fighter(side);
        Snapshot {
            phase: engine.phase(),
            action: f.action_id(),
            frame: f.action_frame(),
            x_bits: f.position.x.to_bits(),
            vital: f.vital_health(),
            guard: f.guard_health(),
            hit_stun: f.hit_stun(),
        }
    })
}
