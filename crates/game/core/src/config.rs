/// Battle configuration constants and tunable parameters.
///
/// Durations are expressed in simulation frames. The simulation advances with a
/// constant `fixed_delta` so that identical input sequences reproduce identical
/// positions bit for bit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Horizontal extent of the stage, centred on x = 0.
    pub battle_area_width: f32,
    /// Upper bound for fighter boxes. Not enforced by push resolution.
    pub battle_area_max_height: f32,
    /// Seconds advanced by one simulation frame.
    pub fixed_delta: f32,
    pub intro_frames: u32,
    pub ko_frames: u32,
    pub end_frames: u32,
    /// Once the end timer has dropped to this value an attack press skips the rest.
    pub end_skippable_frames: u32,
    /// Round wins needed to take the match.
    pub rounds_to_win: u32,
    /// Capacity of the per-round input recording, per side.
    pub max_recording_frames: usize,
    /// Spawn x for player one; player two spawns mirrored.
    pub start_position_x: f32,
    /// Sprite shake magnitude cap applied on hit.
    pub max_sprite_shake: i32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Length of the per-fighter input history ring.
    pub const INPUT_HISTORY_FRAMES: usize = 180;
    /// Upper bound on sound cues a single fighter can emit in one frame.
    pub const MAX_SOUND_CUES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BATTLE_AREA_WIDTH: f32 = 10.0;
    pub const DEFAULT_BATTLE_AREA_MAX_HEIGHT: f32 = 2.0;
    pub const DEFAULT_FIXED_DELTA: f32 = 1.0 / 60.0;
    pub const DEFAULT_INTRO_FRAMES: u32 = 180;
    pub const DEFAULT_KO_FRAMES: u32 = 120;
    pub const DEFAULT_END_FRAMES: u32 = 180;
    pub const DEFAULT_END_SKIPPABLE_FRAMES: u32 = 90;
    pub const DEFAULT_ROUNDS_TO_WIN: u32 = 3;
    pub const DEFAULT_MAX_RECORDING_FRAMES: usize = 60 * 60 * 5;
    pub const DEFAULT_START_POSITION_X: f32 = -2.0;
    pub const DEFAULT_MAX_SPRITE_SHAKE: i32 = 6;

    pub fn new() -> Self {
        Self {
            battle_area_width: Self::DEFAULT_BATTLE_AREA_WIDTH,
            battle_area_max_height: Self::DEFAULT_BATTLE_AREA_MAX_HEIGHT,
            fixed_delta: Self::DEFAULT_FIXED_DELTA,
            intro_frames: Self::DEFAULT_INTRO_FRAMES,
            ko_frames: Self::DEFAULT_KO_FRAMES,
            end_frames: Self::DEFAULT_END_FRAMES,
            end_skippable_frames: Self::DEFAULT_END_SKIPPABLE_FRAMES,
            rounds_to_win: Self::DEFAULT_ROUNDS_TO_WIN,
            max_recording_frames: Self::DEFAULT_MAX_RECORDING_FRAMES,
            start_position_x: Self::DEFAULT_START_POSITION_X,
            max_sprite_shake: Self::DEFAULT_MAX_SPRITE_SHAKE,
        }
    }

    pub fn with_rounds_to_win(mut self, rounds_to_win: u32) -> Self {
        self.rounds_to_win = rounds_to_win;
        self
    }

    /// Shortens every round-phase timer, used by tests and headless runs.
    pub fn with_phase_frames(mut self, intro: u32, ko: u32, end: u32) -> Self {
        self.intro_frames = intro;
        self.ko_frames = ko;
        self.end_frames = end;
        self.end_skippable_frames = self.end_skippable_frames.min(end);
        self
    }

    pub fn with_max_recording_frames(mut self, frames: usize) -> Self {
        self.max_recording_frames = frames;
        self
    }

    /// Left and right stage limits.
    pub fn stage_bounds(&self) -> (f32, f32) {
        let half = self.battle_area_width / 2.0;
        (-half, half)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
