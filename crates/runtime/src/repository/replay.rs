//! Replay log persistence.
//!
//! A replay log is the last finished round's input for both seats. Files use
//! the format:
//! ```text
//! [u32 length][bincode serialized ReplayLog]
//! ```
//! Replaying the log from an intro against the same fighters and
//! configuration reproduces the round exactly.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use fight_core::{BattleEngine, InputBits, InputFrame, Side};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub version: u32,
    /// Fighter names for player one and player two.
    pub fighters: [String; 2],
    pub fixed_delta: f32,
    pub frames: [Vec<InputFrame>; 2],
}

impl ReplayLog {
    pub const VERSION: u32 = 1;

    /// Captures the last finished round held by the engine's recorder.
    ///
    /// Returns `None` when no round has finished yet.
    pub fn from_engine(engine: &BattleEngine) -> Option<Self> {
        let recorder = engine.recorder();
        if recorder.last_round_len() == 0 {
            return None;
        }
        Some(Self {
            version: Self::VERSION,
            fighters: Side::BOTH.map(|side| engine.fighter_data(side).name.clone()),
            fixed_delta: engine.config().fixed_delta,
            frames: Side::BOTH.map(|side| recorder.last_round(side).to_vec()),
        })
    }

    /// Recorded frames per seat.
    pub fn len(&self) -> usize {
        self.frames[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bits(&self, side: Side) -> impl Iterator<Item = InputBits> + '_ {
        self.frames[side.index()].iter().map(|frame| frame.bits)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data =
            bincode::serialize(self).map_err(|e| RuntimeError::Serialization(e.to_string()))?;
        let len = u32::try_from(data.len())
            .map_err(|_| RuntimeError::Serialization("replay log too large".to_owned()))?;

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&len.to_le_bytes())?;
        writer.write_all(&data)?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), frames = self.len(), "saved replay log");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);

        let mut len_bytes = [0u8; 4];
        reader.read_exact(&mut len_bytes)?;
        let mut data = vec![0u8; u32::from_le_bytes(len_bytes) as usize];
        reader.read_exact(&mut data)?;

        let log: Self =
            bincode::deserialize(&data).map_err(|e| RuntimeError::Serialization(e.to_string()))?;
        if log.version != Self::VERSION {
            return Err(RuntimeError::UnsupportedReplayVersion {
                found: log.version,
                expected: Self::VERSION,
            });
        }

        tracing::debug!(path = %path.display(), frames = log.len(), "loaded replay log");
        Ok(log)
    }

    /// Human-readable export of the log.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RuntimeError::Serialization(e.to_string()))
    }
}
