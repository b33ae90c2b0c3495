//! Content factory for building fighter tables from data files.

use std::path::{Path, PathBuf};

use fight_core::{BattleConfig, FighterData};

use crate::error::ContentError;
use crate::loaders::{ConfigLoader, FighterLoader, LoadResult};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── fighters/
///     ├── ronin.ron
///     └── ...
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    ///
    /// A missing file falls back to the default configuration.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::warn!(path = %path.display(), "no config.toml, using defaults");
            return Ok(BattleConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a fighter from `fighters/{name}.ron`.
    pub fn load_fighter(&self, name: &str) -> LoadResult<FighterData> {
        let path = self.fighters_dir().join(format!("{}.ron", name));
        if !path.exists() {
            return Err(ContentError::FighterNotFound {
                name: name.to_owned(),
                dir: self.fighters_dir().display().to_string(),
            }
            .into());
        }
        FighterLoader::load(&path)
    }

    /// Names of every fighter file, sorted.
    pub fn fighter_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.fighters_dir();
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn fighters_dir(&self) -> PathBuf {
        self.data_dir.join("fighters")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
