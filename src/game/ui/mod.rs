//! UI Module
//!
//! Screen-space interface: pixel-font text, the in-level HUD bar and the
//! menu/game-over overlays.

pub mod hud;
pub mod overlay;
pub mod text;

pub use hud::{HUD_BAR_HEIGHT, Hud};
pub use overlay::{generate_game_over_mesh, generate_menu_mesh};
pub use text::{draw_line, draw_line_centered, glyph_rows, line_width, push_quad};
