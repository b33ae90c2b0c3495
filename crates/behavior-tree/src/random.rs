//! Randomness supplied by the context.

/// Uniform draws for [`crate::WeightedChoice`].
///
/// Implemented by contexts that own a seeded generator so a tree never keeps
/// hidden random state of its own.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` is never zero.
    fn roll(&mut self, bound: u32) -> u32;
}
