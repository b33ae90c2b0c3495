//! Runtime orchestration for the fight simulation.
//!
//! This crate wires the input provider abstraction, the scripted opponent,
//! output sinks and replay persistence around [`fight_core::BattleEngine`].
//! Consumers embed [`Runtime`] to drive frames and drain events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`providers`] holds the built-in input sources, including the AI
//! - [`repository`] saves and loads recorded rounds
pub mod api;
pub mod events;
pub mod providers;
pub mod repository;
pub mod runtime;

pub use api::{
    AudioSink, IdleProvider, InputProvider, NullSink, PresentationSink, ProviderKind, Result,
    RuntimeError,
};
pub use events::{Event, EventBus, Topic};
pub use providers::{AiConfig, AiProvider, ReplayProvider, ScriptedProvider};
pub use repository::ReplayLog;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
