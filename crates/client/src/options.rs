//! Options for one headless match.

use std::path::PathBuf;
use std::str::FromStr;

use fight_content::BUNDLED_FIGHTER;

/// Who drives a seat when no replay log is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Controller {
    #[default]
    Cpu,
    Idle,
}

impl FromStr for Controller {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" | "ai" => Ok(Controller::Cpu),
            "idle" | "none" => Ok(Controller::Idle),
            other => Err(format!("unknown controller '{}' (expected cpu or idle)", other)),
        }
    }
}

/// Everything needed to play one headless match.
#[derive(Clone, Debug)]
pub struct MatchOptions {
    /// Content directory; bundled content when `None`.
    pub data_dir: Option<PathBuf>,
    pub fighters: [String; 2],
    pub controllers: [Controller; 2],
    /// Seed for player one's CPU; player two uses the next value.
    pub seed: u64,
    pub rounds_to_win: Option<u32>,
    pub max_frames: u64,
    /// Replay round one as round two.
    pub replay_first_round: bool,
    /// Play this replay log instead of the controllers.
    pub replay_in: Option<PathBuf>,
    /// Save the first finished round here.
    pub replay_out: Option<PathBuf>,
}

impl MatchOptions {
    pub const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 10;
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            data_dir: None,
            fighters: [BUNDLED_FIGHTER.to_owned(), BUNDLED_FIGHTER.to_owned()],
            controllers: [Controller::Cpu; 2],
            seed: 0,
            rounds_to_win: None,
            max_frames: Self::DEFAULT_MAX_FRAMES,
            replay_first_round: false,
            replay_in: None,
            replay_out: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controllers_parse_case_insensitively() {
        assert_eq!("CPU".parse::<Controller>(), Ok(Controller::Cpu));
        assert_eq!("idle".parse::<Controller>(), Ok(Controller::Idle));
        assert!("human".parse::<Controller>().is_err());
    }

    #[test]
    fn defaults_use_the_bundled_fighter() {
        let options = MatchOptions::default();
        assert_eq!(options.fighters, ["ronin".to_owned(), "ronin".to_owned()]);
        assert_eq!(options.max_frames, 36_000);
    }
}
