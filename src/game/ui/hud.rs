//! HUD Bar
//!
//! Translucent strip along the top edge during play: score on the left,
//! level in the middle, lives on the right.

use super::text::{draw_line, line_width, push_quad};
use crate::game::levels::LevelConfig;
use crate::game::player::Player;
use crate::game::types::Mesh;

/// Height of the HUD strip in pixels
pub const HUD_BAR_HEIGHT: f32 = 34.0;

/// Padding from the screen edges
const PADDING: f32 = 10.0;

/// Text scale inside the bar
const TEXT_SCALE: f32 = 2.0;

/// In-level status bar.
pub struct Hud {
    /// Is the bar visible?
    pub visible: bool,
}

impl Default for Hud {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Generate the HUD mesh for one frame.
    pub fn generate_ui_mesh(
        &self,
        screen_width: f32,
        screen_height: f32,
        player: &Player,
        level: &LevelConfig,
    ) -> Mesh {
        let mut mesh = Mesh::new();
        if !self.visible {
            return mesh;
        }

        let to_ndc = |x: f32, y: f32| -> [f32; 3] {
            [
                (x / screen_width) * 2.0 - 1.0,
                1.0 - (y / screen_height) * 2.0,
                0.0,
            ]
        };

        // Dark translucent strip with a lit bottom edge.
        push_quad(
            &mut mesh,
            to_ndc(0.0, 0.0),
            to_ndc(screen_width, 0.0),
            to_ndc(screen_width, HUD_BAR_HEIGHT),
            to_ndc(0.0, HUD_BAR_HEIGHT),
            [0.02, 0.02, 0.05, 0.55],
        );
        push_quad(
            &mut mesh,
            to_ndc(0.0, HUD_BAR_HEIGHT - 2.0),
            to_ndc(screen_width, HUD_BAR_HEIGHT - 2.0),
            to_ndc(screen_width, HUD_BAR_HEIGHT),
            to_ndc(0.0, HUD_BAR_HEIGHT),
            [0.30, 0.35, 0.50, 0.50],
        );

        // Vertically center the 7-pixel glyphs in the strip.
        let text_y = (HUD_BAR_HEIGHT - 7.0 * TEXT_SCALE) / 2.0;

        let score_text = format!("SCORE {}", player.score);
        draw_line(
            &mut mesh,
            &score_text,
            PADDING,
            text_y,
            TEXT_SCALE,
            [1.0, 1.0, 1.0, 1.0],
            screen_width,
            screen_height,
        );

        let level_text = format!("LEVEL {}", level.level.number());
        draw_line(
            &mut mesh,
            &level_text,
            (screen_width - line_width(&level_text, TEXT_SCALE)) / 2.0,
            text_y,
            TEXT_SCALE,
            [0.80, 0.85, 1.00, 1.0],
            screen_width,
            screen_height,
        );

        let lives_text = format!("LIVES {}", player.lives);
        draw_line(
            &mut mesh,
            &lives_text,
            screen_width - PADDING - line_width(&lives_text, TEXT_SCALE),
            text_y,
            TEXT_SCALE,
            [1.00, 0.70, 0.65, 1.0],
            screen_width,
            screen_height,
        );

        mesh
    }
}
