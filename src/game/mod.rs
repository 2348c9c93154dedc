//! Game Module
//!
//! Game-specific systems that build on top of the engine: the drop field,
//! the player craft, levels, scoring and the frame state driving them.

pub mod config;
pub mod levels;
pub mod obstacles;
pub mod player;
pub mod render;
pub mod scoring;
pub mod state;
pub mod types;
pub mod ui;

pub use types::{Mesh, TexMesh, TexVertex, Vertex};
pub use types::{generate_box, generate_rotated_box};

pub use config::GameConfig;
pub use levels::{Level, LevelConfig};
pub use obstacles::{Obstacle, ObstacleField};
pub use player::{Player, STARTING_LIVES};
pub use scoring::{ExitKind, classify_exit, points_for};
pub use state::{GameState, Phase};

pub use render::{BackgroundUniforms, SceneUniforms};
pub use render::{BACKGROUND_SHADER, SCENE_SHADER, UI_SHADER};
pub use render::{build_background_quad, build_player_mesh, build_scene_mesh};
pub use ui::{Hud, generate_game_over_mesh, generate_menu_mesh};
