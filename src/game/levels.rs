//! Level Configuration
//!
//! The three selectable difficulty levels. A level bundles the fog range,
//! the mood colors, the spawn cadence and the per-tick fall step; selecting
//! one overwrites the previous level's scalars wholesale.

/// Difficulty selector, mapped to the F1/F2/F3 keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// 1-based level number for display.
    pub fn number(&self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }
}

/// Tuning derived from a [`Level`] choice.
///
/// Fog distances come from the field depth and a per-level fraction: the
/// fog wall closes in as the level rises, while obstacles spawn more often
/// and fall faster.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    pub level: Level,
    /// Eye distance where fog starts to blend in
    pub fog_start: f32,
    /// Eye distance of full fog; nothing beyond this is visible
    pub fog_end: f32,
    /// Fog and clear color for the level's mood
    pub fog_color: [f32; 3],
    /// Color applied to every obstacle cube
    pub obstacle_tint: [f32; 4],
    /// Seconds between creation ticks
    pub spawn_interval: f32,
    /// Distance each obstacle falls per movement tick
    pub fall_step: f32,
}

impl LevelConfig {
    /// Build the tuning for `level` over a field `field_depth` deep.
    pub fn for_level(level: Level, field_depth: f32) -> Self {
        let (fog_fraction, fog_color, obstacle_tint, spawn_interval, fall_step) = match level {
            // Pale blue-white haze, slow drizzle of obstacles.
            Level::One => (
                1.0,
                [0.72, 0.78, 0.88],
                [0.85, 0.55, 0.20, 1.0],
                3.0,
                1.0,
            ),
            // Rust orange-brown murk, twice the pace.
            Level::Two => (
                0.75,
                [0.55, 0.33, 0.18],
                [0.70, 0.18, 0.12, 1.0],
                2.0,
                2.0,
            ),
            // Murky violet, fog wall at half depth, obstacles pour.
            Level::Three => (
                0.5,
                [0.30, 0.20, 0.40],
                [0.62, 0.55, 0.72, 1.0],
                1.0,
                3.0,
            ),
        };

        let fog_end = field_depth * fog_fraction;
        Self {
            level,
            fog_start: fog_end * 0.5,
            fog_end,
            fog_color,
            obstacle_tint,
            spawn_interval,
            fall_step,
        }
    }
}
