//! Core behavior trait.

use crate::Status;

/// A node evaluated once per frame against a context (the blackboard).
///
/// Nodes are immutable; anything that changes between frames lives in `C`.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
