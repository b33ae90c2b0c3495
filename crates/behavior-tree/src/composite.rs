//! Composite behavior nodes.
//!
//! [`Sequence`] is a short-circuiting AND, [`Selector`] a short-circuiting
//! OR, and [`WeightedChoice`] runs exactly one child picked at random.

use crate::{Behavior, RandomSource, Status};

/// Runs children left to right until one fails.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Runs children left to right until one succeeds.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Picks one child with probability proportional to its weight and runs it.
///
/// The chosen child's status is returned as is; a failing pick does not fall
/// through to the other options. With every weight at zero the node fails
/// without drawing.
pub struct WeightedChoice<C> {
    options: Vec<(u32, Box<dyn Behavior<C>>)>,
    total: u32,
}

impl<C> WeightedChoice<C> {
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(options: Vec<(u32, Box<dyn Behavior<C>>)>) -> Self {
        assert!(
            !options.is_empty(),
            "WeightedChoice must have at least one option"
        );
        let total = options.iter().map(|(weight, _)| *weight).sum();
        Self { options, total }
    }

    pub fn total_weight(&self) -> u32 {
        self.total
    }
}

impl<C: RandomSource> Behavior<C> for WeightedChoice<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        if self.total == 0 {
            return Status::Failure;
        }
        let mut roll = ctx.roll(self.total);
        for (weight, child) in &self.options {
            if roll < *weight {
                return child.tick(ctx);
            }
            roll -= weight;
        }
        Status::Failure
    }
}
