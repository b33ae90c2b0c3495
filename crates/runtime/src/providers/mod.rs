//! Built-in input providers.

pub mod ai;
mod replay;
mod scripted;

pub use ai::{AiConfig, AiProvider};
pub use replay::ReplayProvider;
pub use scripted::ScriptedProvider;
