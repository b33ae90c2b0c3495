//! Fight-specific behavior tree nodes.
//!
//! - `conditions`: read the delayed fight sample
//! - `actions`: queue fixed input plans

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
