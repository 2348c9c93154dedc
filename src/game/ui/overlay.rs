//! Phase Overlays
//!
//! Full-screen overlays for the menu and game-over phases: a dimming
//! quad plus a few centered lines of pixel text.

use super::text::{draw_line_centered, push_quad};
use crate::game::types::Mesh;

const TITLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const HINT_COLOR: [f32; 4] = [0.72, 0.72, 0.78, 1.0];

/// Dim the whole screen with a translucent quad.
fn dim_screen(mesh: &mut Mesh, alpha: f32) {
    push_quad(
        mesh,
        [-1.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, -1.0, 0.0],
        [-1.0, -1.0, 0.0],
        [0.0, 0.0, 0.0, alpha],
    );
}

/// Title screen: game name plus the level-select and control hints.
pub fn generate_menu_mesh(screen_width: f32, screen_height: f32) -> Mesh {
    let mut mesh = Mesh::new();
    dim_screen(&mut mesh, 0.55);

    let mid = screen_height / 2.0;
    draw_line_centered(
        &mut mesh,
        "DROP ZONE",
        mid - 90.0,
        4.0,
        TITLE_COLOR,
        screen_width,
        screen_height,
    );
    draw_line_centered(
        &mut mesh,
        "F1 EASY  F2 NORMAL  F3 HARD",
        mid - 10.0,
        2.0,
        HINT_COLOR,
        screen_width,
        screen_height,
    );
    draw_line_centered(
        &mut mesh,
        "WASD STEER  MOUSE LOOK  ESC QUIT",
        mid + 30.0,
        1.5,
        HINT_COLOR,
        screen_width,
        screen_height,
    );

    mesh
}

/// Terminal screen showing the final score.
pub fn generate_game_over_mesh(screen_width: f32, screen_height: f32, score: u32) -> Mesh {
    let mut mesh = Mesh::new();
    dim_screen(&mut mesh, 0.75);

    let mid = screen_height / 2.0;
    draw_line_centered(
        &mut mesh,
        "GAME OVER",
        mid - 70.0,
        4.0,
        [0.92, 0.30, 0.25, 1.0],
        screen_width,
        screen_height,
    );
    draw_line_centered(
        &mut mesh,
        &format!("FINAL SCORE {}", score),
        mid + 10.0,
        2.0,
        TITLE_COLOR,
        screen_width,
        screen_height,
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_mesh_has_dim_quad_and_text() {
        let mesh = generate_menu_mesh(800.0, 600.0);
        // At minimum the dimming quad plus many glyph quads.
        assert!(mesh.vertices.len() > 4);
        assert_eq!(mesh.vertices.len() % 4, 0, "overlay is quads only");
    }

    #[test]
    fn test_game_over_mesh_shows_the_score() {
        let short = generate_game_over_mesh(800.0, 600.0, 5);
        let long = generate_game_over_mesh(800.0, 600.0, 12345);
        assert!(
            long.vertices.len() > short.vertices.len(),
            "more digits mean more glyph quads"
        );
    }
}
