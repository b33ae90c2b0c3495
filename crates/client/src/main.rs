//! Fight client binary.
//!
//! Plays a headless match between two controllers and prints a summary.
//!
//! # Examples
//!
//! ```bash
//! # CPU vs CPU with the bundled fighter
//! cargo run -p fight-client -- --seed 7
//!
//! # Save the first round, then watch it again from the log
//! cargo run -p fight-client -- --save-replay round.replay
//! cargo run -p fight-client -- --replay round.replay --json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fight_client::{Controller, MatchOptions, logging, run_match};

/// Headless fight runner
#[derive(Parser, Debug)]
#[command(name = "fight")]
#[command(about = "Run a headless match and print the result")]
struct Args {
    /// Content directory with config.toml and fighters/ (default: bundled content)
    #[arg(long, env = "FIGHT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Player one fighter name
    #[arg(long, default_value = fight_content::BUNDLED_FIGHTER)]
    p1: String,

    /// Player two fighter name
    #[arg(long, default_value = fight_content::BUNDLED_FIGHTER)]
    p2: String,

    /// Player one controller: cpu or idle
    #[arg(long, default_value = "cpu")]
    p1_controller: Controller,

    /// Player two controller: cpu or idle
    #[arg(long, default_value = "cpu")]
    p2_controller: Controller,

    /// Seed for the CPU controllers
    #[arg(long, env = "FIGHT_SEED", default_value_t = 0)]
    seed: u64,

    /// Rounds needed to win (default: from config)
    #[arg(long)]
    rounds: Option<u32>,

    /// Frame budget before giving up
    #[arg(long, env = "FIGHT_MAX_FRAMES", default_value_t = MatchOptions::DEFAULT_MAX_FRAMES)]
    max_frames: u64,

    /// Replay the first round as the second
    #[arg(long)]
    replay_first_round: bool,

    /// Play a saved replay log instead of the controllers
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Save the first finished round to this file
    #[arg(long)]
    save_replay: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, env = "FIGHT_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_options(self) -> MatchOptions {
        MatchOptions {
            data_dir: self.data_dir,
            fighters: [self.p1, self.p2],
            controllers: [self.p1_controller, self.p2_controller],
            seed: self.seed,
            rounds_to_win: self.rounds,
            max_frames: self.max_frames,
            replay_first_round: self.replay_first_round,
            replay_in: self.replay,
            replay_out: self.save_replay,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _guard = logging::setup_logging(args.log_file.as_deref())?;
    let json = args.json;
    let options = args.into_options();

    tracing::info!(
        p1 = %options.fighters[0],
        p2 = %options.fighters[1],
        seed = options.seed,
        "Starting match"
    );
    let summary = run_match(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
