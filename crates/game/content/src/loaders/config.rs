//! Battle configuration loader.

use std::path::Path;

use fight_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.end_skippable_frames > config.end_frames {
            tracing::warn!(
                skippable = config.end_skippable_frames,
                end = config.end_frames,
                "end skip window is longer than the end phase"
            );
        }
        Ok(config)
    }
}
