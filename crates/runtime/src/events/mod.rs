//! Topic-based event bus for runtime events.
//!
//! The runtime publishes every engine event to the topic it belongs to, and
//! consumers drain only the topics they subscribed to.

mod bus;

pub use bus::{Event, EventBus, Topic};
