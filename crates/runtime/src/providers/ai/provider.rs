//! Input provider driven by an [`AiPolicy`].

use std::collections::VecDeque;

use behavior_tree::Behavior;
use fight_core::{BattleEngine, BattleEvent, InputBits, RoundPhase, Side};
use serde::{Deserialize, Serialize};

use super::context::{AiContext, FightSample};
use super::presets::{self, AiPolicy};
use crate::api::InputProvider;

/// Tuning for the scripted opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub seed: u64,
    /// How many ticks old the sample the policy reacts to is.
    pub look_behind: usize,
    /// Samples kept; must exceed `look_behind`.
    pub history_len: usize,
}

impl AiConfig {
    pub const DEFAULT_LOOK_BEHIND: usize = 5;
    pub const DEFAULT_HISTORY_LEN: usize = 10;

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            look_behind: Self::DEFAULT_LOOK_BEHIND,
            history_len: Self::DEFAULT_HISTORY_LEN,
        }
    }
}

/// Scripted opponent.
///
/// Every input-capturing tick it samples the fight, then reacts to the
/// sample `look_behind` ticks old. Movement and attack are separate queues:
/// each tick drains one entry from each, and a queue found empty is refilled
/// from the policy, contributing neutral input on that tick. Samples and
/// queues reset at every intro; the random stream carries across rounds.
pub struct AiProvider {
    config: AiConfig,
    policy: AiPolicy,
    ctx: AiContext,
    /// Newest first.
    history: VecDeque<FightSample>,
}

impl AiProvider {
    pub fn new(config: AiConfig) -> Self {
        Self::with_policy(config, presets::footsies())
    }

    pub fn with_policy(config: AiConfig, policy: AiPolicy) -> Self {
        let mut config = config;
        if config.history_len <= config.look_behind {
            tracing::warn!(
                look_behind = config.look_behind,
                history_len = config.history_len,
                "ai history shorter than look-behind, extending"
            );
            config.history_len = config.look_behind + 1;
        }
        Self {
            config,
            policy,
            ctx: AiContext::new(config.seed),
            history: VecDeque::with_capacity(config.history_len),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn samples(&self) -> usize {
        self.history.len()
    }

    fn record(&mut self, sample: FightSample) {
        self.history.push_front(sample);
        self.history.truncate(self.config.history_len);
    }

    fn reset_round(&mut self) {
        self.history.clear();
        self.ctx.clear_queues();
    }
}

impl InputProvider for AiProvider {
    fn next_input(&mut self, side: Side, engine: &BattleEngine) -> InputBits {
        if !matches!(engine.phase(), RoundPhase::Intro | RoundPhase::Fight) {
            return InputBits::empty();
        }

        self.record(FightSample::capture(engine, side));
        let Some(&sample) = self.history.get(self.config.look_behind) else {
            return InputBits::empty();
        };
        self.ctx.sample = sample;

        let facing = engine.fighter(side).facing;
        let mut bits = InputBits::empty();

        match self.ctx.next_movement() {
            Some(stick) => bits |= stick.to_bits(facing),
            None => {
                self.policy.movement.tick(&mut self.ctx);
            }
        }
        match self.ctx.next_attack() {
            Some(true) => bits |= InputBits::ATTACK,
            Some(false) => {}
            None => {
                self.policy.attack.tick(&mut self.ctx);
            }
        }

        bits
    }

    fn on_round_event(&mut self, event: &BattleEvent) {
        if let BattleEvent::PhaseChanged {
            phase: RoundPhase::Intro,
        } = event
        {
            self.reset_round();
        }
    }
}
