//! Minimal behavior tree for per-frame decisions in fixed-step games.
//!
//! Every tick of a tree completes within one simulation frame. There is no
//! `Running` state: long plans are expressed by having a leaf enqueue work
//! (for example a sequence of inputs) that the caller drains over later
//! frames.
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`], [`WeightedChoice`]
//!
//! Leaves are implemented by the caller against its own context type.
//!
//! Random choices draw from the context through [`RandomSource`], so a
//! seeded context replays the same decisions.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod random;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence, WeightedChoice};
pub use random::RandomSource;
pub use status::Status;
