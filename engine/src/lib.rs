//! Drop Zone Engine Library
//!
//! Window-system-agnostic infrastructure for the Drop Zone arcade game:
//! camera math, input state tracking, and the wgpu rendering context.
//! Game rules live in [`game`] and are pulled in from `src/game/` so the
//! binary and the integration tests share one crate.
//!
//! # Modules
//!
//! - [`render`] - wgpu surface/device setup, depth buffer, pipelines, textures
//! - [`input`] - held-key map and pointer motion tracking
//! - [`camera`] - perspective camera and mouse-driven view rotation
//! - [`game`] - obstacle field, player, levels, scoring, frame state
//!
//! # Example
//!
//! ```ignore
//! use drop_zone_engine::camera::{Camera, ViewRotation};
//! use drop_zone_engine::input::{KeyMap, PointerTracker};
//! use drop_zone_engine::game::config::GameConfig;
//! use drop_zone_engine::game::state::GameState;
//!
//! let config = GameConfig::default();
//! let mut game = GameState::new(&config, 0xD05E);
//! let mut keys = KeyMap::new();
//!
//! // Feed one polled frame
//! game.apply_input(&keys);
//! game.update(1.0 / 60.0);
//! ```

pub mod camera;
pub mod input;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the render module contents at crate level for convenience
pub use render::*;
// Re-export commonly used camera and input types
pub use camera::{Camera, ViewRotation};
pub use input::{KeyMap, MoveKey, PointerTracker};
