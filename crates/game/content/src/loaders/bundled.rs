//! Sample content compiled into the crate.

use fight_core::{BattleConfig, FighterData};

use crate::loaders::{ConfigLoader, FighterLoader, LoadResult};

const CONFIG_TOML: &str = include_str!("../../data/config.toml");
const RONIN_RON: &str = include_str!("../../data/fighters/ronin.ron");

/// Name of the bundled sample fighter.
pub const BUNDLED_FIGHTER: &str = "ronin";

pub fn bundled_config() -> LoadResult<BattleConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}

pub fn bundled_fighter() -> LoadResult<FighterData> {
    FighterLoader::parse(RONIN_RON)
}
