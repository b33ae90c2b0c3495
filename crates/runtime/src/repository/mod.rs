//! Persistence for recorded rounds.

mod replay;

pub use replay::ReplayLog;
