//! Action nodes for AI behavior trees.
//!
//! Each plan is a fixed per-frame input sequence. Ticking a plan appends the
//! sequence to its channel's queue and always succeeds.

use std::iter::repeat_n;

use behavior_tree::{Behavior, Status};

use crate::providers::ai::{AiContext, Stick};

/// Frames of neutral stick in a neutral plan.
const NEUTRAL_FRAMES: usize = 30;
/// Frames of released attack after a poke.
const RECOVERY_FRAMES: usize = 18;
/// Gap between the two presses of a two-hit string.
const LINK_FRAMES: usize = 3;
const QUICK_CHARGE_FRAMES: usize = 60;
const LONG_CHARGE_FRAMES: usize = 120;

/// Stick sequences for the movement channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementPlan {
    Neutral,
    /// Long walk in with two short step-backs.
    FarWalk,
    /// Two dashes in, each followed by a step back.
    FarDash,
    /// Shorter walk in with two step-backs.
    MidWalk,
    /// One dash in and a step back.
    MidDash,
    /// Walk back for a second.
    FallBack,
    /// Back dash, then walk back.
    FallBackDash,
}

impl MovementPlan {
    pub fn steps(self) -> Vec<Stick> {
        use Stick::{Backward, Forward, Neutral};

        let mut steps = Vec::new();
        let mut hold = |stick: Stick, frames: usize| steps.extend(repeat_n(stick, frames));
        match self {
            MovementPlan::Neutral => hold(Neutral, NEUTRAL_FRAMES),
            MovementPlan::FarWalk => {
                hold(Forward, 40);
                hold(Backward, 10);
                hold(Forward, 30);
                hold(Backward, 10);
            }
            MovementPlan::FarDash => {
                for _ in 0..2 {
                    dash(&mut hold, Forward);
                    hold(Backward, 25);
                }
            }
            MovementPlan::MidWalk => {
                hold(Forward, 30);
                hold(Backward, 10);
                hold(Forward, 20);
                hold(Backward, 10);
            }
            MovementPlan::MidDash => {
                dash(&mut hold, Forward);
                hold(Backward, 30);
            }
            MovementPlan::FallBack => hold(Backward, 60),
            MovementPlan::FallBackDash => {
                dash(&mut hold, Backward);
                hold(Backward, 60);
            }
        }
        steps
    }
}

/// Tap, release, tap.
fn dash(hold: &mut impl FnMut(Stick, usize), direction: Stick) {
    hold(direction, 1);
    hold(Stick::Neutral, 1);
    hold(direction, 1);
}

impl Behavior<AiContext> for MovementPlan {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        tracing::trace!(plan = ?self, "queue movement");
        ctx.queue_movement(self.steps());
        Status::Success
    }
}

/// Button sequences for the attack channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackPlan {
    NoAttack,
    /// One press, then recovery.
    OneHit,
    /// Two presses close together so the second cancels the first.
    TwoHit,
    /// Holds the button long enough for a special, then releases.
    QuickSpecial,
    /// Holds the button twice as long before releasing.
    DelayedSpecial,
}

impl AttackPlan {
    pub fn presses(self) -> Vec<bool> {
        let mut presses = Vec::new();
        let mut hold = |pressed: bool, frames: usize| presses.extend(repeat_n(pressed, frames));
        match self {
            AttackPlan::NoAttack => hold(false, NEUTRAL_FRAMES),
            AttackPlan::OneHit => {
                hold(true, 1);
                hold(false, RECOVERY_FRAMES);
            }
            AttackPlan::TwoHit => {
                hold(true, 1);
                hold(false, LINK_FRAMES);
                hold(true, 1);
                hold(false, RECOVERY_FRAMES);
            }
            AttackPlan::QuickSpecial => {
                hold(true, QUICK_CHARGE_FRAMES);
                hold(false, 1);
            }
            AttackPlan::DelayedSpecial => {
                hold(true, LONG_CHARGE_FRAMES);
                hold(false, 1);
            }
        }
        presses
    }
}

impl Behavior<AiContext> for AttackPlan {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        tracing::trace!(plan = ?self, "queue attack");
        ctx.queue_attack(self.presses());
        Status::Success
    }
}
