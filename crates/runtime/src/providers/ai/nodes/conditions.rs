//! Condition nodes for AI behavior trees.
//!
//! Condition nodes read the delayed fight sample and return Success or
//! Failure. They never touch the input queues.

use behavior_tree::{Behavior, Status};

use crate::providers::ai::AiContext;

/// Succeeds when the fighters are farther apart than `min`.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::Sequence;
///
/// // Approach only from long range
/// Sequence::new(vec![
///     Box::new(DistanceAbove(4.0)),
///     Box::new(MovementPlan::FarWalk),
/// ])
/// ```
pub struct DistanceAbove(pub f32);

impl Behavior<AiContext> for DistanceAbove {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        (ctx.sample.distance_x > self.0).into()
    }
}

/// Succeeds while the opponent is reeling, guard broken, or in a special.
pub struct OpponentPunishable;

impl Behavior<AiContext> for OpponentPunishable {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.sample.is_opponent_punishable().into()
    }
}

/// Succeeds while the opponent is in a normal attack.
pub struct OpponentNormalAttacking;

impl Behavior<AiContext> for OpponentNormalAttacking {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.sample.opponent_normal_attack.into()
    }
}
