//! Shorthand constructors returning boxed nodes.
//!
//! `sequence(vec![..])` instead of `Box::new(Sequence::new(vec![..]))`.

use crate::{Behavior, RandomSource, Selector, Sequence, WeightedChoice};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn weighted<C: RandomSource + 'static>(
    options: Vec<(u32, Box<dyn Behavior<C>>)>,
) -> Box<dyn Behavior<C>> {
    Box::new(WeightedChoice::new(options))
}
