//! Per-combatant state machine.
//!
//! A [`FighterState`] is driven once per simulation frame by the round
//! orchestrator in a fixed order: input, frame advance, action request,
//! movement, box refresh. Every method that needs authored data takes the
//! fighter's oracle explicitly; the state never owns its tables.

use arrayvec::ArrayVec;

use crate::action::{ActionData, ActionId, ActionType, AttackDef, AttackId, MotionId, SoundId};
use crate::combat::DamageResult;
use crate::config::BattleConfig;
use crate::env::{FighterOracle, OracleError};
use crate::error::GameError;
use crate::geometry::{Facing, Hitbox, Hurtbox, Pushbox, Vec2};
use crate::input::{InputBits, InputHistory};

use super::Side;

/// Request to play an action's sound, emitted when the action is committed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundCue {
    pub action: ActionId,
    pub sound: SoundId,
    pub facing_right: bool,
    pub x: f32,
}

/// Runtime state of one combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct FighterState {
    side: Side,
    pub position: Vec2,
    pub velocity_x: f32,
    pub facing: Facing,

    vital_health: i32,
    guard_health: i32,

    action_id: ActionId,
    action_frame: u32,
    /// Hits landed by the current action activation.
    hit_count: u32,
    hit_stun: u32,

    /// Single pending cancel target; a newer request overwrites it.
    buffered: Option<ActionId>,
    /// Reaction committed once hit stun expires.
    reserved: Option<ActionId>,

    sprite_shake: i32,
    has_won: bool,

    input: InputHistory,
    input_backward: bool,
    proximity_guard_reserved: bool,

    hitboxes: Vec<Hitbox>,
    hurtboxes: Vec<Hurtbox>,
    pushbox: Pushbox,

    sound_cues: ArrayVec<SoundCue, { BattleConfig::MAX_SOUND_CUES }>,
}

impl FighterState {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            position: Vec2::ZERO,
            velocity_x: 0.0,
            facing: side.start_facing(),
            vital_health: 0,
            guard_health: 0,
            action_id: ActionId::STAND,
            action_frame: 0,
            hit_count: 0,
            hit_stun: 0,
            buffered: None,
            reserved: None,
            sprite_shake: 0,
            has_won: false,
            input: InputHistory::new(),
            input_backward: false,
            proximity_guard_reserved: false,
            hitboxes: Vec::new(),
            hurtboxes: Vec::new(),
            pushbox: Pushbox::default(),
            sound_cues: ArrayVec::new(),
        }
    }

    // ===== round lifecycle =====

    /// Resets health, input and action for a new round.
    pub fn setup_battle_start(
        &mut self,
        data: &(impl FighterOracle + ?Sized),
        position: Vec2,
        facing: Facing,
    ) {
        let profile = data.profile();
        self.position = position;
        self.facing = facing;
        self.velocity_x = 0.0;
        self.vital_health = profile.start_vital_health;
        self.guard_health = profile.start_guard_health;
        self.hit_stun = 0;
        self.has_won = false;
        self.input_backward = false;
        self.proximity_guard_reserved = false;
        self.hitboxes.clear();
        self.hurtboxes.clear();
        self.clear_input();
        self.set_current_action(data, ActionId::STAND, 0);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn request_win(&mut self) {
        self.has_won = true;
    }

    // ===== per-frame pipeline =====

    pub fn update_input(&mut self, bits: InputBits) {
        self.input.push(bits);
    }

    /// Advances the action cursor unless frozen by hit stun.
    pub fn increment_action_frame(&mut self, data: &(impl FighterOracle + ?Sized)) {
        if self.sprite_shake != 0 {
            self.sprite_shake = -self.sprite_shake;
            self.sprite_shake += if self.sprite_shake > 0 { -1 } else { 1 };
        }

        if self.hit_stun > 0 {
            self.hit_stun -= 1;
            return;
        }

        let Some(action) = data.action(self.action_id) else {
            OracleError::ActionNotFound(self.action_id).log();
            return;
        };

        if self.action_frame < action.frame_count {
            self.action_frame += 1;
        }
        if action.is_finished_at(self.action_frame) && action.looping {
            self.action_frame = action.loop_from_frame;
        }
    }

    /// Intro frames only ever ask for the neutral stance.
    pub fn update_intro_action(&mut self, data: &(impl FighterOracle + ?Sized)) {
        self.request_action(data, ActionId::STAND);
    }

    /// Turns this frame's input into action requests.
    pub fn update_action_request(&mut self, data: &(impl FighterOracle + ?Sized)) {
        if self.has_won {
            if self.action_id != ActionId::WIN {
                self.set_current_action(data, ActionId::WIN, 0);
            }
            return;
        }

        if let Some(reserved) = self.reserved {
            if self.hit_stun == 0 {
                self.reserved = None;
                self.set_current_action(data, reserved, 0);
                return;
            }
        }

        if let Some(buffered) = self.buffered {
            if self.can_cancel_attack(data) && self.hit_stun == 0 {
                self.buffered = None;
                self.set_current_action(data, buffered, 0);
                return;
            }
        }

        let profile = data.profile();
        let (special_hold, dash_allow) = (profile.special_hold_frames, profile.dash_allow_frames);
        let held = self.input.current();
        let forward = held.is_forward(self.facing);
        let backward = held.is_backward(self.facing);

        if self.input.special_released(special_hold) {
            let target = if forward || backward {
                ActionId::BACK_SPECIAL
            } else {
                ActionId::NORMAL_SPECIAL
            };
            self.request_action(data, target);
        } else if self.input.pressed(0).is_attack() {
            if self.action_id.is_normal_attack() && !self.is_action_finished(data) {
                self.request_action(data, ActionId::NORMAL_SPECIAL);
            } else if forward || backward {
                self.request_action(data, ActionId::BACK_ATTACK);
            } else {
                self.request_action(data, ActionId::NORMAL_ATTACK);
            }
        }

        if self.input.dash_forward(self.facing, dash_allow) {
            self.request_action(data, ActionId::DASH_FORWARD);
        } else if self.input.dash_backward(self.facing, dash_allow) {
            self.request_action(data, ActionId::DASH_BACKWARD);
        }

        self.input_backward = backward;

        let directional = match (forward, backward) {
            (true, true) | (false, false) => ActionId::STAND,
            (true, false) => ActionId::FORWARD,
            (false, true) if self.proximity_guard_reserved => ActionId::GUARD_PROXIMITY,
            (false, true) => ActionId::BACKWARD,
        };
        self.request_action(data, directional);

        self.proximity_guard_reserved = false;
    }

    /// Applies walk speed or the action's authored velocity.
    pub fn update_movement(&mut self, data: &(impl FighterOracle + ?Sized), delta: f32) {
        if self.is_in_hit_stun() {
            return;
        }

        let profile = data.profile();
        let sign = self.facing.sign();
        match self.action_id {
            ActionId::FORWARD => {
                self.position.x += profile.forward_speed * sign * delta;
            }
            ActionId::BACKWARD => {
                self.position.x -= profile.backward_speed * sign * delta;
            }
            id => {
                let movement = data
                    .action(id)
                    .and_then(|action| action.movement_at(self.action_frame));
                if let Some(movement) = movement {
                    self.velocity_x = movement.velocity_x;
                    if movement.velocity_x != 0.0 {
                        self.position.x += movement.velocity_x * sign * delta;
                    }
                }
            }
        }
    }

    /// Rebuilds world-space boxes from the current action frame.
    pub fn update_boxes(&mut self, data: &(impl FighterOracle + ?Sized)) {
        self.hitboxes.clear();
        self.hurtboxes.clear();

        let profile = data.profile();
        let origin = self.position;
        let facing = self.facing;

        let Some(action) = data.action(self.action_id) else {
            self.pushbox = Pushbox {
                rect: profile.base_pushbox.to_world(origin, facing),
            };
            return;
        };
        let frame = self.action_frame;

        self.hitboxes
            .extend(action.hitboxes_at(frame).map(|hitbox| Hitbox {
                rect: hitbox.rect.to_world(origin, facing),
                attack_id: hitbox.attack,
                proximity: hitbox.proximity,
            }));
        self.hurtboxes
            .extend(action.hurtboxes_at(frame).map(|hurtbox| Hurtbox {
                rect: hurtbox
                    .shape
                    .resolve(profile.base_hurtbox)
                    .to_world(origin, facing),
            }));

        let local_push = action
            .pushbox_at(frame)
            .map_or(profile.base_pushbox, |pushbox| {
                pushbox.shape.resolve(profile.base_pushbox)
            });
        self.pushbox = Pushbox {
            rect: local_push.to_world(origin, facing),
        };
    }

    /// Moves the fighter and every derived box by the same offset.
    pub fn apply_position_change(&mut self, dx: f32, dy: f32) {
        self.position.x += dx;
        self.position.y += dy;
        for hitbox in &mut self.hitboxes {
            hitbox.rect.translate(dx, dy);
        }
        for hurtbox in &mut self.hurtboxes {
            hurtbox.rect.translate(dx, dy);
        }
        self.pushbox.rect.translate(dx, dy);
    }

    // ===== transitions =====

    /// Asks to switch to `target`, honouring cancel rules.
    ///
    /// Returns whether the request was accepted. A bufferable cancel window
    /// stores `target` as the pending action and still returns `false`.
    pub fn request_action(&mut self, data: &(impl FighterOracle + ?Sized), target: ActionId) -> bool {
        self.request_action_from(data, target, 0)
    }

    pub fn request_action_from(
        &mut self,
        data: &(impl FighterOracle + ?Sized),
        target: ActionId,
        start_frame: u32,
    ) -> bool {
        let Some(current) = data.action(self.action_id) else {
            return self.set_current_action(data, target, start_frame);
        };

        if current.is_finished_at(self.action_frame) {
            return self.set_current_action(data, target, start_frame);
        }

        if self.action_id == target {
            return false;
        }

        if current.always_cancelable {
            return self.set_current_action(data, target, start_frame);
        }

        for window in current.cancels_into(self.action_frame, target) {
            if window.immediate {
                self.buffered = Some(target);
                return true;
            }
            if window.bufferable {
                self.buffered = Some(target);
            }
        }

        false
    }

    /// Commits `id` unconditionally. Unknown ids are rejected.
    fn set_current_action(
        &mut self,
        data: &(impl FighterOracle + ?Sized),
        id: ActionId,
        start_frame: u32,
    ) -> bool {
        let Some(action) = data.action(id) else {
            OracleError::ActionNotFound(id).log();
            return false;
        };

        tracing::debug!(side = %self.side, from = %self.action_id, to = %id, "action committed");

        self.action_id = id;
        self.action_frame = start_frame;
        self.hit_count = 0;
        self.buffered = None;
        self.reserved = None;
        self.sprite_shake = 0;

        if id != ActionId::GUARD_BREAK {
            self.queue_sound(action);
        }
        true
    }

    fn queue_sound(&mut self, action: &ActionData) {
        let Some(sound) = action.sound else {
            return;
        };
        let cue = SoundCue {
            action: action.id,
            sound,
            facing_right: self.facing.is_right(),
            x: self.position.x,
        };
        if self.sound_cues.try_push(cue).is_err() {
            tracing::debug!(side = %self.side, action = %action.id, "sound cue dropped");
        }
    }

    fn can_cancel_attack(&self, data: &(impl FighterOracle + ?Sized)) -> bool {
        data.profile().cancel_on_whiff || self.hit_count > 0
    }

    // ===== combat notifications =====

    /// Whether another hit from `attack` may register this activation.
    ///
    /// Unknown attacks are allowed through so the miss surfaces in the log.
    pub fn can_attack_hit(&self, data: &(impl FighterOracle + ?Sized), attack: AttackId) -> bool {
        match data.attack(attack) {
            Some(def) => self.hit_count < def.hit_count,
            None => {
                OracleError::AttackNotFound(attack).log();
                true
            }
        }
    }

    pub fn notify_attack_hit(&mut self) {
        self.hit_count += 1;
    }

    /// Applies `attack` to this fighter and picks the reaction.
    pub fn notify_damaged(
        &mut self,
        data: &(impl FighterOracle + ?Sized),
        attack: &AttackDef,
    ) -> DamageResult {
        let current = data.action(self.action_id);
        let blocking = self.action_id == ActionId::BACKWARD
            || current.is_some_and(|action| action.kind == ActionType::Guard);

        if blocking {
            self.guard_health -= attack.guard_damage.max(0);
            if self.guard_health < 0 {
                self.guard_health = 0;
                self.set_current_action(data, attack.guard_action, 0);
                self.reserved = Some(ActionId::GUARD_BREAK);
                if let Some(action) = data.action(ActionId::GUARD_BREAK) {
                    self.queue_sound(action);
                }
                return DamageResult::GuardBreak;
            }
            self.set_current_action(data, attack.guard_action, 0);
            return DamageResult::Guard;
        }

        let counter = current
            .and_then(|action| action.status_at(self.action_frame))
            .is_some_and(|status| status.counter_hit);

        self.vital_health = (self.vital_health - attack.vital_damage.max(0)).max(0);
        self.set_current_action(data, attack.damage_action, 0);

        if counter {
            DamageResult::Counter
        } else {
            DamageResult::Damage
        }
    }

    /// Latches a proximity guard for next frame if backward was held.
    pub fn notify_in_proximity_guard_range(&mut self) {
        if self.input_backward {
            self.proximity_guard_reserved = true;
        }
    }

    pub fn set_hit_stun(&mut self, frames: u32) {
        self.hit_stun = frames;
    }

    /// Starts the hit shake, capped at `max` and signed against facing.
    pub fn set_sprite_shake(&mut self, frames: u32, max: i32) {
        let magnitude = i32::try_from(frames).unwrap_or(i32::MAX).min(max);
        self.sprite_shake = if self.facing.is_right() {
            -magnitude
        } else {
            magnitude
        };
    }

    /// Takes the sound cues queued since the last drain.
    pub fn drain_sound_cues(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.sound_cues.drain(..)
    }

    // ===== readouts =====

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn vital_health(&self) -> i32 {
        self.vital_health
    }

    pub fn guard_health(&self) -> i32 {
        self.guard_health
    }

    pub fn is_dead(&self) -> bool {
        self.vital_health <= 0
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn action_id(&self) -> ActionId {
        self.action_id
    }

    pub fn action_frame(&self) -> u32 {
        self.action_frame
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn hit_stun(&self) -> u32 {
        self.hit_stun
    }

    pub fn is_in_hit_stun(&self) -> bool {
        self.hit_stun > 0
    }

    pub fn buffered_action(&self) -> Option<ActionId> {
        self.buffered
    }

    pub fn reserved_action(&self) -> Option<ActionId> {
        self.reserved
    }

    pub fn sprite_shake(&self) -> i32 {
        self.sprite_shake
    }

    pub fn input(&self) -> &InputHistory {
        &self.input
    }

    pub fn hitboxes(&self) -> &[Hitbox] {
        &self.hitboxes
    }

    pub fn hurtboxes(&self) -> &[Hurtbox] {
        &self.hurtboxes
    }

    pub fn pushbox(&self) -> &Pushbox {
        &self.pushbox
    }

    pub fn is_action_finished(&self, data: &(impl FighterOracle + ?Sized)) -> bool {
        data.action(self.action_id)
            .is_none_or(|action| action.is_finished_at(self.action_frame))
    }

    /// Frames until the current action ends; always-cancelable actions report 0.
    pub fn frames_left(&self, data: &(impl FighterOracle + ?Sized)) -> i32 {
        match data.action(self.action_id) {
            Some(action) if !action.always_cancelable => {
                action.frame_count as i32 - self.action_frame as i32
            }
            _ => 0,
        }
    }

    pub fn current_motion(&self, data: &(impl FighterOracle + ?Sized)) -> Option<MotionId> {
        data.action(self.action_id)
            .and_then(|action| action.motion_at(self.action_frame))
            .map(|motion| motion.motion)
    }
}
