//! Game Render Module
//!
//! Game-specific rendering: shader sources, uniform layouts and the
//! per-frame scene mesh builders.

pub mod scene;
pub mod shader;
pub mod uniforms;

pub use scene::{
    OBSTACLE_HALF_EXTENT, build_background_quad, build_player_mesh, build_scene_mesh,
};
pub use shader::{BACKGROUND_SHADER, SCENE_SHADER, UI_SHADER};
pub use uniforms::{BackgroundUniforms, SceneUniforms};
