//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on the frame loop and providers.

pub mod errors;
pub mod providers;
pub mod sinks;

pub use errors::{ProviderKind, Result, RuntimeError};
pub use providers::{IdleProvider, InputProvider};
pub use sinks::{AudioSink, NullSink, PresentationSink};
