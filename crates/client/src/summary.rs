//! Match tallies and the printable summary.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use fight_core::{BattleEngine, DamageResult, HitEvent, RoundPhase, Side, SoundCue};
use fight_runtime::{AudioSink, PresentationSink};
use serde::Serialize;

#[derive(Debug, Default)]
struct Tally {
    /// Landed hits per attacker, indexed by side.
    hits: [u32; 2],
    guarded: u32,
    guard_breaks: u32,
    counters: u32,
    sound_cues: u32,
    rounds_played: u32,
}

/// Counts what the engine reports; clones share one tally.
#[derive(Clone, Debug, Default)]
pub struct TallySink {
    tally: Arc<Mutex<Tally>>,
}

impl TallySink {
    fn with_tally<R>(&self, f: impl FnOnce(&mut Tally) -> R) -> R {
        let mut tally = self.tally.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut tally)
    }

    pub fn summarize(&self, engine: &BattleEngine, frames: u64) -> MatchSummary {
        self.with_tally(|tally| MatchSummary {
            fighters: Side::BOTH.map(|side| engine.fighter_data(side).name.clone()),
            winner: engine.match_winner(),
            round_wins: Side::BOTH.map(|side| engine.round_wins(side)),
            rounds_played: tally.rounds_played,
            frames,
            seconds: frames as f32 * engine.config().fixed_delta,
            hits: tally.hits,
            guarded: tally.guarded,
            guard_breaks: tally.guard_breaks,
            counters: tally.counters,
            sound_cues: tally.sound_cues,
        })
    }
}

impl AudioSink for TallySink {
    fn play(&mut self, side: Side, cue: &SoundCue) {
        tracing::trace!(%side, sound = cue.sound.0, x = cue.x, "sound cue");
        self.with_tally(|tally| tally.sound_cues += 1);
    }
}

impl PresentationSink for TallySink {
    fn present(&mut self, _engine: &BattleEngine) {}

    fn on_phase_changed(&mut self, phase: RoundPhase) {
        if phase == RoundPhase::Fight {
            self.with_tally(|tally| tally.rounds_played += 1);
        }
    }

    fn on_hit(&mut self, hit: &HitEvent) {
        tracing::debug!(
            attacker = %hit.attacker,
            result = %hit.result,
            stun = hit.stun_frames,
            x = hit.point.x,
            "hit"
        );
        self.with_tally(|tally| {
            tally.hits[hit.attacker.index()] += 1;
            match hit.result {
                DamageResult::Guard => tally.guarded += 1,
                DamageResult::GuardBreak => tally.guard_breaks += 1,
                DamageResult::Counter => tally.counters += 1,
                DamageResult::Damage => {}
            }
        });
    }
}

/// Result of one headless match.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchSummary {
    pub fighters: [String; 2],
    /// `None` when the frame budget ran out first.
    pub winner: Option<Side>,
    pub round_wins: [u32; 2],
    pub rounds_played: u32,
    pub frames: u64,
    /// Simulated time.
    pub seconds: f32,
    /// Hits landed by player one and player two, blocked or not.
    pub hits: [u32; 2],
    pub guarded: u32,
    pub guard_breaks: u32,
    pub counters: u32,
    pub sound_cues: u32,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2] = &self.fighters;
        writeln!(f, "{} (p1) vs {} (p2)", p1, p2)?;
        match self.winner {
            Some(winner) => writeln!(f, "winner: {}", winner)?,
            None => writeln!(f, "winner: none (frame budget exhausted)")?,
        }
        writeln!(
            f,
            "rounds: {}-{} over {} played",
            self.round_wins[0], self.round_wins[1], self.rounds_played
        )?;
        writeln!(f, "frames: {} ({:.1}s)", self.frames, self.seconds)?;
        writeln!(
            f,
            "hits: {}-{} (guarded {}, guard breaks {}, counters {})",
            self.hits[0], self.hits[1], self.guarded, self.guard_breaks, self.counters
        )?;
        write!(f, "sound cues: {}", self.sound_cues)
    }
}
