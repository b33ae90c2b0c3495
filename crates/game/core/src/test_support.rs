//! Small in-code roster shared by unit tests.

use crate::action::{
    ActionData, ActionId, ActionType, AttackDef, AttackId, CancelWindow, FrameRange, MotionId,
    SoundId,
};
use crate::env::{FighterData, FighterProfile};
use crate::geometry::Rect;

pub const JAB: AttackId = AttackId(1);
pub const SWEEP: AttackId = AttackId(2);
pub const SPECIAL: AttackId = AttackId(3);
pub const SWEEP_PROXIMITY: AttackId = AttackId(20);

fn movement(id: ActionId, frames: u32) -> ActionData {
    ActionData::new(id, ActionType::Movement, frames)
        .looping_from(0)
        .always_cancelable()
        .with_base_body()
        .with_motion(FrameRange::new(0, frames), MotionId(id.0))
}

fn reaction(id: ActionId, kind: ActionType, frames: u32) -> ActionData {
    ActionData::new(id, kind, frames).with_base_body()
}

pub fn sample_fighter() -> FighterData {
    let special_cancel = CancelWindow {
        frames: FrameRange::new(5, 14),
        targets: vec![ActionId::NORMAL_SPECIAL, ActionId::BACK_SPECIAL],
        bufferable: true,
        immediate: false,
    };

    let actions = [
        movement(ActionId::STAND, 60).with_sound(SoundId(0)),
        movement(ActionId::FORWARD, 30),
        movement(ActionId::BACKWARD, 30),
        reaction(ActionId::DASH_FORWARD, ActionType::Movement, 16)
            .with_movement(FrameRange::new(0, 10), 6.0),
        reaction(ActionId::DASH_BACKWARD, ActionType::Movement, 20)
            .with_movement(FrameRange::new(0, 10), -5.0),
        reaction(ActionId::NORMAL_ATTACK, ActionType::Attack, 22)
            .with_sound(SoundId(1))
            .with_counter_hit(FrameRange::new(0, 4))
            .with_hitbox(FrameRange::new(5, 7), Rect::new(0.8, 0.5, 1.0, 0.4), JAB)
            .with_cancel(special_cancel.clone()),
        reaction(ActionId::BACK_ATTACK, ActionType::Attack, 24)
            .with_proximity_box(FrameRange::new(0, 8), Rect::new(1.5, 0.0, 2.0, 1.5), SWEEP_PROXIMITY)
            .with_hitbox(FrameRange::new(6, 8), Rect::new(0.9, 0.0, 1.2, 0.3), SWEEP)
            .with_movement(FrameRange::new(0, 4), 1.0)
            .with_cancel(special_cancel),
        reaction(ActionId::NORMAL_SPECIAL, ActionType::Attack, 40)
            .with_hitbox(FrameRange::new(8, 20), Rect::new(0.9, 0.4, 1.2, 0.6), SPECIAL),
        reaction(ActionId::BACK_SPECIAL, ActionType::Attack, 50)
            .with_hitbox(FrameRange::new(10, 14), Rect::new(1.0, 0.4, 1.4, 0.6), SPECIAL)
            .with_movement(FrameRange::new(0, 14), 4.0),
        reaction(ActionId::DAMAGE, ActionType::Damage, 20),
        reaction(ActionId::GUARD_MID, ActionType::Guard, 20).with_sound(SoundId(2)),
        reaction(ActionId::GUARD_STAND, ActionType::Guard, 20),
        reaction(ActionId::GUARD_CROUCH, ActionType::Guard, 20),
        reaction(ActionId::GUARD_BREAK, ActionType::Damage, 30).with_sound(SoundId(9)),
        reaction(ActionId::GUARD_PROXIMITY, ActionType::Guard, 10),
        reaction(ActionId::DEAD, ActionType::Damage, 60),
        ActionData::new(ActionId::WIN, ActionType::Movement, 60)
            .looping_from(30)
            .with_base_body(),
    ];

    let attacks = [
        AttackDef::new(JAB).with_damage(1, 1).with_stun(12, 8, 30),
        AttackDef::new(SWEEP).with_damage(1, 1).with_stun(14, 10, 30),
        AttackDef::new(SPECIAL)
            .with_hit_count(2)
            .with_damage(1, 2)
            .with_stun(20, 16, 40),
        // Proximity boxes never deal damage; only their hit count matters.
        AttackDef::new(SWEEP_PROXIMITY).with_hit_count(u32::MAX),
    ];

    FighterData::from_parts("sample", FighterProfile::default(), actions, attacks)
}
