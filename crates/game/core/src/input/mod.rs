//! Per-frame controller input and the rolling history used for motion detection.
mod bits;
mod history;

pub use bits::{InputBits, InputFrame};
pub use history::InputHistory;
