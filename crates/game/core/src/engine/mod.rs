//! Round orchestration.
//!
//! [`BattleEngine`] owns both fighters and the round state machine. Each call
//! to [`BattleEngine::tick`] advances exactly one simulation frame through
//! Stopped -> Intro -> Fight -> KO -> End -> Stopped. Given the same inputs the
//! engine produces the same states bit for bit; it performs no I/O and draws
//! no random numbers.

mod events;
mod recorder;

pub use events::BattleEvent;
pub use recorder::InputRecorder;

use std::sync::Arc;

use crate::action::MotionId;
use crate::combat::{
    Contact, HitEvent, clamp_to_stage, detect_contact, resolve_push, touches_proximity,
};
use crate::config::BattleConfig;
use crate::env::{FighterData, FighterOracle, OracleError};
use crate::error::GameError;
use crate::geometry::Vec2;
use crate::input::{InputBits, InputFrame};
use crate::state::{FighterState, RoundPhase, Side};

/// Fixed-step battle simulation for two fighters.
pub struct BattleEngine {
    config: BattleConfig,
    data: [Arc<FighterData>; 2],
    fighters: [FighterState; 2],
    phase: RoundPhase,
    /// Frames left in the timed phases (intro, KO, end).
    timer: u32,
    /// Fight frames elapsed; -1 on the frame the fight starts.
    frame_count: i64,
    /// Frames since the current intro began, used for input timestamps.
    round_frames: u64,
    round_wins: [u32; 2],
    recorder: InputRecorder,
    replay_requested: bool,
    winner: Option<Side>,
    events: Vec<BattleEvent>,
}

impl BattleEngine {
    pub fn new(config: BattleConfig, data: [Arc<FighterData>; 2]) -> Self {
        for fighter in &data {
            if fighter.is_empty() {
                OracleError::TablesNotAvailable(fighter.name.clone()).log();
            }
        }
        let recorder = InputRecorder::new(config.max_recording_frames);
        Self {
            config,
            data,
            fighters: [FighterState::new(Side::P1), FighterState::new(Side::P2)],
            phase: RoundPhase::Stopped,
            timer: 0,
            frame_count: 0,
            round_frames: 0,
            round_wins: [0, 0],
            recorder,
            replay_requested: false,
            winner: None,
            events: Vec::new(),
        }
    }

    /// Advances one frame and returns the events it produced.
    ///
    /// `live` is ignored while a recorded round is being replayed, except for
    /// skipping the end of a round.
    pub fn tick(&mut self, live: [InputBits; 2]) -> &[BattleEvent] {
        self.events.clear();

        match self.phase {
            RoundPhase::Stopped => {
                if self.winner.is_none() {
                    self.enter_phase(RoundPhase::Intro);
                }
            }
            RoundPhase::Intro => {
                self.update_intro(live);
                if self.count_down() {
                    self.enter_phase(RoundPhase::Fight);
                }
            }
            RoundPhase::Fight => {
                self.frame_count += 1;
                self.update_fight(live);
                if self.fighters.iter().any(FighterState::is_dead) {
                    self.enter_phase(RoundPhase::KO);
                }
            }
            RoundPhase::KO => {
                if self.count_down() {
                    self.enter_phase(RoundPhase::End);
                }
            }
            RoundPhase::End => {
                self.update_end();
                let expired = self.count_down();
                let skipped = self.timer <= self.config.end_skippable_frames
                    && live.iter().any(|bits| bits.is_attack());
                if expired || skipped {
                    self.enter_phase(RoundPhase::Stopped);
                }
            }
        }

        &self.events
    }

    /// Replays the last finished round starting at the next intro.
    pub fn request_replay(&mut self) {
        self.replay_requested = true;
    }

    fn count_down(&mut self) -> bool {
        self.timer = self.timer.saturating_sub(1);
        self.timer == 0
    }

    fn enter_phase(&mut self, phase: RoundPhase) {
        tracing::info!(from = %self.phase, to = %phase, "round phase");
        self.phase = phase;
        self.events.push(BattleEvent::PhaseChanged { phase });

        match phase {
            RoundPhase::Stopped => {
                let rounds = self.config.rounds_to_win;
                let winner = Side::BOTH
                    .into_iter()
                    .find(|side| self.round_wins[side.index()] >= rounds);
                if let Some(winner) = winner {
                    tracing::info!(%winner, wins = ?self.round_wins, "match over");
                    self.winner = Some(winner);
                    self.events.push(BattleEvent::MatchOver { winner });
                }
            }
            RoundPhase::Intro => {
                for side in Side::BOTH {
                    let x = match side {
                        Side::P1 => self.config.start_position_x,
                        Side::P2 => -self.config.start_position_x,
                    };
                    let data = &*self.data[side.index()];
                    self.fighters[side.index()].setup_battle_start(
                        data,
                        Vec2::new(x, 0.0),
                        side.start_facing(),
                    );
                }
                self.timer = self.config.intro_frames;
                self.round_frames = 0;
                self.recorder.start_round();
                if std::mem::take(&mut self.replay_requested) {
                    if self.recorder.start_replay() {
                        tracing::info!(frames = self.recorder.last_round_len(), "replaying last round");
                        self.events.push(BattleEvent::ReplayStarted);
                    } else {
                        tracing::warn!("replay requested but no round has been recorded");
                    }
                }
                self.flush_sound_cues();
            }
            RoundPhase::Fight => {
                self.frame_count = -1;
            }
            RoundPhase::KO => {
                self.timer = self.config.ko_frames;
                self.recorder.finish_round();
                for fighter in &mut self.fighters {
                    fighter.clear_input();
                }
            }
            RoundPhase::End => {
                self.timer = self.config.end_frames;
                let dead: Vec<Side> = Side::BOTH
                    .into_iter()
                    .filter(|side| self.fighters[side.index()].is_dead())
                    .collect();
                if let [loser] = dead.as_slice() {
                    let winner = loser.opponent();
                    self.round_wins[winner.index()] += 1;
                    self.fighters[winner.index()].request_win();
                    let wins = self.round_wins[winner.index()];
                    tracing::info!(%winner, wins, "round won");
                    self.events.push(BattleEvent::RoundWon { winner, wins });
                } else {
                    tracing::info!(dead = dead.len(), "round ended without a winner");
                }
            }
        }
    }

    // ===== per-phase pipelines =====

    fn update_intro(&mut self, live: [InputBits; 2]) {
        self.capture_input(live);
        self.advance_frames();
        for side in Side::BOTH {
            let data = &*self.data[side.index()];
            self.fighters[side.index()].update_intro_action(data);
        }
        self.move_and_push();
        self.flush_sound_cues();
    }

    fn update_fight(&mut self, live: [InputBits; 2]) {
        self.capture_input(live);
        self.advance_frames();
        self.request_actions();
        self.move_and_push();
        self.flush_sound_cues();
        self.resolve_hits();
        self.flush_sound_cues();
    }

    fn update_end(&mut self) {
        self.advance_frames();
        self.request_actions();
        self.move_and_push();
        self.flush_sound_cues();
    }

    /// Reads live or replayed input, records it and feeds both histories.
    fn capture_input(&mut self, live: [InputBits; 2]) {
        let time = self.round_frames as f32 * self.config.fixed_delta;
        let frames = if self.recorder.is_replaying() {
            [
                self.recorder.replay_frame(Side::P1),
                self.recorder.replay_frame(Side::P2),
            ]
        } else {
            live.map(|bits| InputFrame::new(bits, time))
        };
        self.recorder.record(frames);
        self.round_frames += 1;

        for (fighter, frame) in self.fighters.iter_mut().zip(frames) {
            fighter.update_input(frame.bits);
        }
    }

    fn advance_frames(&mut self) {
        for side in Side::BOTH {
            let data = &*self.data[side.index()];
            self.fighters[side.index()].increment_action_frame(data);
        }
    }

    fn request_actions(&mut self) {
        for side in Side::BOTH {
            let data = &*self.data[side.index()];
            self.fighters[side.index()].update_action_request(data);
        }
    }

    /// Movement, box refresh, then fighter-vs-fighter and stage pushes.
    fn move_and_push(&mut self) {
        let delta = self.config.fixed_delta;
        for side in Side::BOTH {
            let data = &*self.data[side.index()];
            let fighter = &mut self.fighters[side.index()];
            fighter.update_movement(data, delta);
            fighter.update_boxes(data);
        }

        let [p1, p2] = &mut self.fighters;
        resolve_push(p1, p2);

        let bounds = self.config.stage_bounds();
        for fighter in &mut self.fighters {
            clamp_to_stage(fighter, bounds);
        }
    }

    /// Hit, hurt and proximity checks, player one attacking first.
    fn resolve_hits(&mut self) {
        for attacker_side in Side::BOTH {
            let defender_side = attacker_side.opponent();
            let attacker_data = &*self.data[attacker_side.index()];
            let defender_data = &*self.data[defender_side.index()];

            let [p1, p2] = &mut self.fighters;
            let (attacker, defender) = match attacker_side {
                Side::P1 => (p1, p2),
                Side::P2 => (p2, p1),
            };

            match detect_contact(attacker, attacker_data, defender) {
                Contact::Hit { attack, point } => {
                    let def = match attacker_data.try_attack(attack) {
                        Ok(def) => def,
                        Err(err) => {
                            // Nothing to apply; proximity boxes still count.
                            err.log();
                            if touches_proximity(attacker, attacker_data, defender) {
                                defender.notify_in_proximity_guard_range();
                            }
                            continue;
                        }
                    };
                    attacker.notify_attack_hit();
                    let result = defender.notify_damaged(defender_data, def);
                    let stun_frames = def.stun_for(result);
                    attacker.set_hit_stun(stun_frames);
                    defender.set_hit_stun(stun_frames);
                    defender.set_sprite_shake(stun_frames / 3, self.config.max_sprite_shake);

                    tracing::debug!(
                        attacker = %attacker_side,
                        %attack,
                        %result,
                        stun_frames,
                        vital = defender.vital_health(),
                        guard = defender.guard_health(),
                        "hit"
                    );
                    self.events.push(BattleEvent::Hit(HitEvent {
                        attacker: attacker_side,
                        defender: defender_side,
                        attack,
                        point,
                        result,
                        stun_frames,
                    }));
                }
                Contact::Proximity => defender.notify_in_proximity_guard_range(),
                Contact::Miss => {}
            }
        }
    }

    fn flush_sound_cues(&mut self) {
        for (fighter, side) in self.fighters.iter_mut().zip(Side::BOTH) {
            self.events
                .extend(fighter.drain_sound_cues().map(|cue| BattleEvent::Sound { side, cue }));
        }
    }

    // ===== readouts =====

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn fighter(&self, side: Side) -> &FighterState {
        &self.fighters[side.index()]
    }

    pub fn fighter_data(&self, side: Side) -> &FighterData {
        &self.data[side.index()]
    }

    pub fn round_wins(&self, side: Side) -> u32 {
        self.round_wins[side.index()]
    }

    pub fn frame_count(&self) -> i64 {
        self.frame_count
    }

    /// Frames left in the current timed phase.
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn is_replaying(&self) -> bool {
        self.recorder.is_replaying()
    }

    pub fn recorder(&self) -> &InputRecorder {
        &self.recorder
    }

    /// Opponent's remaining action frames minus this side's.
    pub fn frame_advantage(&self, side: Side) -> i32 {
        let own = self.fighter(side).frames_left(self.fighter_data(side));
        let other = side.opponent();
        let theirs = self.fighter(other).frames_left(self.fighter_data(other));
        theirs - own
    }

    pub fn current_motion(&self, side: Side) -> Option<MotionId> {
        self.fighter(side).current_motion(self.fighter_data(side))
    }

    pub fn is_match_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn match_winner(&self) -> Option<Side> {
        self.winner
    }
}
