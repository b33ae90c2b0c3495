use crate::combat::HitEvent;
use crate::state::{RoundPhase, Side, SoundCue};

/// Everything observable that happened during one tick, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    PhaseChanged { phase: RoundPhase },
    /// The last round's input is being replayed from this intro.
    ReplayStarted,
    Sound { side: Side, cue: SoundCue },
    Hit(HitEvent),
    RoundWon { winner: Side, wins: u32 },
    MatchOver { winner: Side },
}

impl BattleEvent {
    pub fn as_hit(&self) -> Option<&HitEvent> {
        match self {
            BattleEvent::Hit(hit) => Some(hit),
            _ => None,
        }
    }
}
