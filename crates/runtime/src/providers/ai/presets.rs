//! Complete opponent policies.
//!
//! A policy is two trees, one per input channel. Each tree runs only when its
//! channel's queue is empty and queues exactly one plan:
//!
//! ```text
//! footsies().movement
//!   └─ Selector
//!       ├─ Sequence [DistanceAbove(4.0), weighted far plans]
//!       ├─ Sequence [DistanceAbove(3.0), weighted approach / neutral]
//!       ├─ Sequence [DistanceAbove(2.5), weighted approach / fall back / neutral]
//!       ├─ Sequence [DistanceAbove(2.0), weighted fall back / neutral]
//!       └─ weighted fall back / neutral
//! ```

use behavior_tree::{Behavior, builder::*};

use super::context::AiContext;
use super::nodes::{
    AttackPlan, DistanceAbove, MovementPlan, OpponentNormalAttacking, OpponentPunishable,
};

pub type BehaviorTree = Box<dyn Behavior<AiContext>>;

/// Distance bands, far to near.
const FAR: f32 = 4.0;
const MID: f32 = 3.0;
const NEAR: f32 = 2.5;
const CLOSE: f32 = 2.0;

pub struct AiPolicy {
    pub movement: BehaviorTree,
    pub attack: BehaviorTree,
}

/// Spacing-driven policy: walks and dashes to the edge of poke range, steps
/// back out, pokes at mid range and punishes anything it sees get hit.
pub fn footsies() -> AiPolicy {
    AiPolicy {
        movement: footsies_movement(),
        attack: footsies_attack(),
    }
}

fn node(behavior: impl Behavior<AiContext> + 'static) -> BehaviorTree {
    Box::new(behavior)
}

fn band(min: f32, then: BehaviorTree) -> BehaviorTree {
    sequence(vec![node(DistanceAbove(min)), then])
}

fn movement(options: &[(u32, MovementPlan)]) -> BehaviorTree {
    weighted(
        options
            .iter()
            .map(|&(weight, plan)| (weight, node(plan)))
            .collect(),
    )
}

fn attack(options: &[(u32, AttackPlan)]) -> BehaviorTree {
    weighted(
        options
            .iter()
            .map(|&(weight, plan)| (weight, node(plan)))
            .collect(),
    )
}

pub fn footsies_movement() -> BehaviorTree {
    use MovementPlan::*;

    selector(vec![
        band(FAR, movement(&[(1, FarWalk), (1, FarDash)])),
        band(
            MID,
            movement(&[(2, MidWalk), (2, MidDash), (1, FarWalk), (1, FarDash), (1, Neutral)]),
        ),
        band(
            NEAR,
            movement(&[
                (1, MidWalk),
                (1, MidDash),
                (1, FallBack),
                (1, FallBackDash),
                (1, Neutral),
            ]),
        ),
        band(CLOSE, movement(&[(1, FallBack), (1, FallBackDash), (2, Neutral)])),
        movement(&[(1, FallBack), (1, FallBackDash), (1, Neutral)]),
    ])
}

pub fn footsies_attack() -> BehaviorTree {
    use AttackPlan::*;

    selector(vec![
        sequence(vec![node(OpponentPunishable), node(TwoHit)]),
        band(FAR, attack(&[(3, NoAttack), (1, DelayedSpecial)])),
        band(
            MID,
            selector(vec![
                sequence(vec![node(OpponentNormalAttacking), node(TwoHit)]),
                attack(&[(2, NoAttack), (2, OneHit), (1, DelayedSpecial)]),
            ]),
        ),
        band(NEAR, attack(&[(1, NoAttack), (1, OneHit), (1, TwoHit)])),
        band(
            CLOSE,
            attack(&[(2, OneHit), (2, TwoHit), (1, QuickSpecial), (1, DelayedSpecial)]),
        ),
        attack(&[(1, OneHit), (2, TwoHit)]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ai::{FightSample, Stick};

    fn ctx_at(distance_x: f32) -> AiContext {
        let mut ctx = AiContext::new(7);
        ctx.sample = FightSample {
            distance_x,
            ..FightSample::default()
        };
        ctx
    }

    #[test]
    fn every_band_queues_exactly_one_plan() {
        let policy = footsies();
        for distance in [5.0, 3.5, 2.7, 2.2, 1.0] {
            let mut ctx = ctx_at(distance);
            assert!(policy.movement.tick(&mut ctx).is_success());
            assert!(policy.attack.tick(&mut ctx).is_success());
            assert!(ctx.movement_len() > 0, "movement at {distance}");
            assert!(ctx.attack_len() > 0, "attack at {distance}");
        }
    }

    #[test]
    fn long_range_always_approaches() {
        let policy = footsies();
        for _ in 0..20 {
            let mut ctx = ctx_at(6.0);
            policy.movement.tick(&mut ctx);
            assert_eq!(ctx.next_movement(), Some(Stick::Forward));
        }
    }

    #[test]
    fn punishable_opponent_gets_the_two_hit_string() {
        let policy = footsies();
        let mut ctx = ctx_at(6.0);
        ctx.sample.opponent_damaged = true;
        policy.attack.tick(&mut ctx);

        let mut queued = Vec::new();
        while let Some(press) = ctx.next_attack() {
            queued.push(press);
        }
        assert_eq!(queued, AttackPlan::TwoHit.presses());
    }

    #[test]
    fn mid_range_counters_normal_attacks() {
        let policy = footsies();
        let mut ctx = ctx_at(3.5);
        ctx.sample.opponent_normal_attack = true;
        policy.attack.tick(&mut ctx);
        assert_eq!(ctx.attack_len(), AttackPlan::TwoHit.presses().len());
    }
}
