//! Text Rendering
//!
//! Quad-based 5x7 pixel font for the HUD and the phase overlays.
//! Callers hand in pixel coordinates; everything is converted to NDC here
//! so the UI pipeline needs no uniforms.

use crate::game::types::{Mesh, Vertex};

/// Pixel columns per glyph cell, including one column of spacing.
pub const GLYPH_ADVANCE: f32 = 6.0;

/// Append one screen-space quad to the mesh (corners already in NDC).
pub fn push_quad(mesh: &mut Mesh, tl: [f32; 3], tr: [f32; 3], br: [f32; 3], bl: [f32; 3], color: [f32; 4]) {
    let base = mesh.vertices.len() as u32;
    let normal = [0.0, 0.0, 1.0];

    for position in [tl, tr, br, bl] {
        mesh.vertices.push(Vertex {
            position,
            normal,
            color,
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

// ============================================================================
// 5x7 PIXEL FONT
// ============================================================================
// One row per byte, top to bottom; bit 4 is the leftmost column.

pub fn glyph_rows(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00001, 0b00001, 0b00001, 0b00001, 0b10001, 0b10001, 0b01110],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b01010, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        // Unknown = filled box
        _ => [0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
    }
}

/// Width of a rendered line in pixels.
pub fn line_width(text: &str, scale: f32) -> f32 {
    text.chars().count() as f32 * GLYPH_ADVANCE * scale
}

/// Draw a line of text with its top-left corner at (x, y) in pixels.
pub fn draw_line(
    mesh: &mut Mesh,
    text: &str,
    x: f32,
    y: f32,
    scale: f32,
    color: [f32; 4],
    screen_width: f32,
    screen_height: f32,
) {
    let to_ndc = |px: f32, py: f32| -> [f32; 3] {
        [
            (px / screen_width) * 2.0 - 1.0,
            1.0 - (py / screen_height) * 2.0,
            0.0,
        ]
    };

    for (char_idx, c) in text.chars().enumerate() {
        let rows = glyph_rows(c);
        let glyph_x = x + char_idx as f32 * GLYPH_ADVANCE * scale;

        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..5 {
                if (bits >> (4 - col)) & 1 == 0 {
                    continue;
                }
                let px = glyph_x + col as f32 * scale;
                let py = y + row as f32 * scale;
                push_quad(
                    mesh,
                    to_ndc(px, py),
                    to_ndc(px + scale, py),
                    to_ndc(px + scale, py + scale),
                    to_ndc(px, py + scale),
                    color,
                );
            }
        }
    }
}

/// Draw a line horizontally centered on the screen.
pub fn draw_line_centered(
    mesh: &mut Mesh,
    text: &str,
    y: f32,
    scale: f32,
    color: [f32; 4],
    screen_width: f32,
    screen_height: f32,
) {
    let x = (screen_width - line_width(text, scale)) / 2.0;
    draw_line(mesh, text, x, y, scale, color, screen_width, screen_height);
}
