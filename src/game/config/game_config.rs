//! Game Configuration
//!
//! Centralized configuration for the drop field, timing cadences and
//! scoring. Replaces hardcoded constants scattered across the frame loop.

/// Configuration for the application window.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Initial window width (pixels)
    pub width: u32,
    /// Initial window height (pixels)
    pub height: u32,
    /// Window title
    pub title: &'static str,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Drop Zone",
        }
    }
}

/// Configuration for the drop field geometry.
///
/// The field is a box seen from behind: x spans the width, y the height,
/// and z runs away from the camera into the fog. Obstacles spawn at
/// `depth` and are removed once they fall past `exit_z` behind the camera.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Field extent along x; spawn positions are uniform in [0, width)
    pub width: f32,
    /// Field extent along y; spawn positions are uniform in [0, height)
    pub height: f32,
    /// Spawn depth for new obstacles (z at the far fog wall)
    pub depth: f32,
    /// Removal threshold behind the camera; the head obstacle is scored
    /// once its z falls to or below this
    pub exit_z: f32,
    /// Fixed z of the player craft plane
    pub player_z: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            depth: 100.0,
            exit_z: -25.0,
            player_z: 5.0,
        }
    }
}

impl FieldConfig {
    /// Center of the player plane; where the craft starts.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Configuration for the two fixed-timestep cadences.
#[derive(Clone, Debug)]
pub struct CadenceConfig {
    /// Seconds between movement ticks (obstacle advancement + scoring)
    pub move_interval: f32,
    /// Seconds between creation ticks before any level is selected;
    /// once a level is active its own spawn interval takes over
    pub default_spawn_interval: f32,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            move_interval: 0.1,
            default_spawn_interval: 1.0,
        }
    }
}

/// Configuration for player movement and lean response.
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    /// Distance moved per held key per input poll
    pub move_step: f32,
    /// Degrees of lean added per held key per input poll
    pub lean_step: f32,
    /// Degrees of lean recovered per poll on axes with no key held
    pub lean_decay: f32,
    /// Forward/back lean never exceeds this magnitude (degrees)
    pub pitch_lean_limit: f32,
    /// Left/right lean never exceeds this magnitude (degrees)
    pub roll_lean_limit: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_step: 0.5,
            lean_step: 3.0,
            lean_decay: 1.0,
            pitch_lean_limit: 35.0,
            roll_lean_limit: 55.0,
        }
    }
}

/// Configuration for mouse-driven view rotation.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// Degrees accumulated per pixel of pointer motion
    pub sensitivity: f32,
    /// Divisor between the rotation accumulator and the applied rotation
    pub rotation_damping: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.4,
            rotation_damping: 10.0,
        }
    }
}

/// Configuration for exit classification and scoring.
#[derive(Clone, Debug)]
pub struct ScoreConfig {
    /// Points awarded when an exiting obstacle counts as a hit
    pub hit_points: u32,
    /// Points awarded when an exiting obstacle was avoided
    pub avoid_points: u32,
    /// Signed player-to-obstacle difference below which an exit is a hit
    pub proximity_threshold: f32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            hit_points: 10,
            avoid_points: 5,
            proximity_threshold: 5.0,
        }
    }
}

/// Central configuration for the whole game.
///
/// `Default` returns the shipped tuning; tests construct modified copies
/// to pin individual behaviors.
#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub cadence: CadenceConfig,
    pub player: PlayerConfig,
    pub view: ViewConfig,
    pub score: ScoreConfig,
}
