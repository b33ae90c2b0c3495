//! Data-driven fighter definitions and loaders.
//!
//! This crate turns authored data files into the immutable tables the
//! simulation reads:
//! - Fighter action and attack tables (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//! - A bundled sample fighter and configuration compiled into the crate
//!
//! Content is consumed through `fight-core`'s oracles and never appears in
//! per-frame state.

pub mod error;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use error::ContentError;

#[cfg(feature = "loaders")]
pub use loaders::{
    BUNDLED_FIGHTER, ConfigLoader, ContentFactory, FighterFile, FighterLoader, LoadResult,
    bundled_config, bundled_fighter,
};
