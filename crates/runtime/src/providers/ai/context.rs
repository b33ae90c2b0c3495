//! Blackboard shared by the scripted opponent's behavior trees.
//!
//! The [`AiContext`] holds the delayed view of the fight the policy reacts
//! to, the random stream its weighted choices draw from, and the two input
//! queues the policy fills.

use std::collections::VecDeque;

use behavior_tree::RandomSource;
use fight_core::{ActionId, BattleEngine, Facing, InputBits, Side};

use super::rng::PcgStream;

/// What the opponent was doing on one sampled tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FightSample {
    /// Horizontal distance between the two fighters.
    pub distance_x: f32,
    pub opponent_damaged: bool,
    pub opponent_guard_broken: bool,
    pub opponent_normal_attack: bool,
    pub opponent_special_attack: bool,
}

impl FightSample {
    /// Samples the fight from `side`'s point of view.
    pub fn capture(engine: &BattleEngine, side: Side) -> Self {
        let own = engine.fighter(side);
        let opponent = engine.fighter(side.opponent());
        let action = opponent.action_id();
        Self {
            distance_x: (opponent.position.x - own.position.x).abs(),
            opponent_damaged: action == ActionId::DAMAGE,
            opponent_guard_broken: action == ActionId::GUARD_BREAK,
            opponent_normal_attack: action.is_normal_attack(),
            opponent_special_attack: action.is_special_attack(),
        }
    }

    /// Opponent is stuck in a reaction or committed to a long special.
    pub fn is_opponent_punishable(&self) -> bool {
        self.opponent_damaged || self.opponent_guard_broken || self.opponent_special_attack
    }
}

/// Stick direction relative to the fighter's facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stick {
    #[default]
    Neutral,
    Forward,
    Backward,
}

impl Stick {
    pub fn to_bits(self, facing: Facing) -> InputBits {
        match self {
            Stick::Neutral => InputBits::empty(),
            Stick::Forward => InputBits::forward(facing),
            Stick::Backward => InputBits::backward(facing),
        }
    }
}

pub struct AiContext {
    /// Sample the policy decides on.
    pub sample: FightSample,
    rng: PcgStream,
    movement: VecDeque<Stick>,
    /// `true` entries hold the attack button.
    attack: VecDeque<bool>,
}

impl AiContext {
    pub fn new(seed: u64) -> Self {
        Self {
            sample: FightSample::default(),
            rng: PcgStream::new(seed),
            movement: VecDeque::new(),
            attack: VecDeque::new(),
        }
    }

    pub fn queue_movement(&mut self, steps: impl IntoIterator<Item = Stick>) {
        self.movement.extend(steps);
    }

    pub fn queue_attack(&mut self, presses: impl IntoIterator<Item = bool>) {
        self.attack.extend(presses);
    }

    pub fn next_movement(&mut self) -> Option<Stick> {
        self.movement.pop_front()
    }

    pub fn next_attack(&mut self) -> Option<bool> {
        self.attack.pop_front()
    }

    pub fn movement_len(&self) -> usize {
        self.movement.len()
    }

    pub fn attack_len(&self) -> usize {
        self.attack.len()
    }

    /// Drops both queues; the random stream keeps its position.
    pub fn clear_queues(&mut self) {
        self.movement.clear();
        self.attack.clear();
    }
}

impl RandomSource for AiContext {
    fn roll(&mut self, bound: u32) -> u32 {
        self.rng.next_index(bound)
    }
}
