//! Scripted opponent.
//!
//! Spacing-based CPU player that reacts to a slightly delayed view of the
//! fight:
//!
//! 1. **Sampling**: each input tick records distance and what the opponent
//!    is doing into a short history
//! 2. **Delay**: decisions read the sample a few ticks old, never the live one
//! 3. **Planning**: when a channel's queue runs dry, that channel's behavior
//!    tree picks a distance band and a weighted random plan
//! 4. **Playback**: queued plans drain one input per tick, mapped through the
//!    fighter's current facing
//!
//! # Core Components
//!
//! - [`AiProvider`]: the [`crate::InputProvider`] implementation
//! - [`AiContext`]: blackboard holding the sample, the queues and the seeded stream
//! - [`presets`]: ready-made [`AiPolicy`] trees

pub mod context;
pub mod nodes;
pub mod presets;
pub mod provider;
mod rng;

pub use context::{AiContext, FightSample, Stick};
pub use presets::{AiPolicy, BehaviorTree};
pub use provider::{AiConfig, AiProvider};
pub use rng::PcgStream;
