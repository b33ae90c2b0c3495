//! Headless match runner.
//!
//! # Architecture
//!
//! ```text
//! fight (binary)
//!   ├─→ content   (bundled data or a data directory)
//!   ├─→ runtime   (engine, providers, event bus)
//!   └─→ summary   (what happened, printed as text or JSON)
//! ```
//!
//! The binary only parses arguments and sets up logging; everything that
//! touches the simulation lives here so it can be driven from tests.

mod options;
pub mod logging;
mod summary;

pub use options::{Controller, MatchOptions};
pub use summary::{MatchSummary, TallySink};

use std::sync::Arc;

use anyhow::{Context, Result};
use fight_content::{ContentFactory, bundled_config, bundled_fighter};
use fight_core::{BattleConfig, BattleEvent, FighterData, Side};
use fight_runtime::{
    AiConfig, AiProvider, IdleProvider, InputProvider, ReplayLog, ReplayProvider, Runtime,
};

/// Loads the battle configuration and both fighters.
///
/// Without a data directory the bundled content is used and fighter names
/// must match the bundled fighter.
pub fn load_content(options: &MatchOptions) -> Result<(BattleConfig, [Arc<FighterData>; 2])> {
    let (mut config, fighters) = match &options.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            let config = factory.load_config()?;
            let p1 = factory.load_fighter(&options.fighters[0])?;
            let p2 = if options.fighters[1] == options.fighters[0] {
                p1.clone()
            } else {
                factory.load_fighter(&options.fighters[1])?
            };
            (config, [p1, p2])
        }
        None => {
            for name in &options.fighters {
                anyhow::ensure!(
                    name == fight_content::BUNDLED_FIGHTER,
                    "fighter '{}' is not bundled; pass --data-dir to load it",
                    name
                );
            }
            let fighter = bundled_fighter().context("Failed to load bundled fighter")?;
            let config = bundled_config().context("Failed to load bundled config")?;
            (config, [fighter.clone(), fighter])
        }
    };

    if let Some(rounds) = options.rounds_to_win {
        config = config.with_rounds_to_win(rounds.max(1));
    }
    Ok((config, fighters.map(Arc::new)))
}

fn provider_for(
    controller: Controller,
    side: Side,
    seed: u64,
    replay: Option<&ReplayLog>,
) -> Box<dyn InputProvider> {
    if let Some(log) = replay {
        return Box::new(ReplayProvider::new(log, side));
    }
    match controller {
        Controller::Cpu => Box::new(AiProvider::new(AiConfig::with_seed(seed))),
        Controller::Idle => Box::new(IdleProvider),
    }
}

/// Plays one match and reports what happened.
///
/// Running out of frames is not an error; the summary then has no winner.
pub fn run_match(options: &MatchOptions) -> Result<MatchSummary> {
    let (config, fighters) = load_content(options)?;
    let replay = match &options.replay_in {
        Some(path) => Some(
            ReplayLog::load(path)
                .with_context(|| format!("Failed to load replay {}", path.display()))?,
        ),
        None => None,
    };
    if let Some(log) = &replay {
        tracing::info!(
            frames = log.len(),
            p1 = %log.fighters[0],
            p2 = %log.fighters[1],
            "playing replay log"
        );
    }

    let tally = TallySink::default();
    let [p1_data, p2_data] = fighters;
    let mut runtime = Runtime::builder()
        .battle_config(config)
        .fighter(Side::P1, p1_data)
        .fighter(Side::P2, p2_data)
        .provider(
            Side::P1,
            provider_for(options.controllers[0], Side::P1, options.seed, replay.as_ref()),
        )
        .provider(
            Side::P2,
            provider_for(
                options.controllers[1],
                Side::P2,
                options.seed.wrapping_add(1),
                replay.as_ref(),
            ),
        )
        .audio_sink(tally.clone())
        .presentation_sink(tally.clone())
        .build()?;

    let mut replay_requested = false;
    let mut replay_saved = false;
    while runtime.frame() < options.max_frames && !runtime.engine().is_match_over() {
        let round_won = runtime
            .step()
            .iter()
            .any(|event| matches!(event, BattleEvent::RoundWon { .. }));
        if !round_won {
            continue;
        }

        if let Some(path) = &options.replay_out
            && !replay_saved
            && let Some(log) = runtime.replay_log()
        {
            log.save(path)
                .with_context(|| format!("Failed to save replay {}", path.display()))?;
            tracing::info!(path = %path.display(), frames = log.len(), "saved first round");
            replay_saved = true;
        }
        if options.replay_first_round && !replay_requested {
            runtime.request_replay();
            replay_requested = true;
        }
    }

    let engine = runtime.engine();
    let summary = tally.summarize(engine, runtime.frame());
    match summary.winner {
        Some(winner) => tracing::info!(%winner, frames = summary.frames, "match over"),
        None => tracing::warn!(frames = summary.frames, "frame budget exhausted before a winner"),
    }
    Ok(summary)
}
