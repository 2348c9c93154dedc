//! Scene Mesh Builders
//!
//! Per-frame CPU assembly of everything the scene pipeline draws: the
//! player craft with its lean and rotor, the obstacle cubes, and the
//! backdrop quad on the far fog wall. Pure geometry, no GPU types.

use glam::{Mat3, Vec3};

use crate::game::player::Player;
use crate::game::state::GameState;
use crate::game::types::{Mesh, TexMesh, TexVertex, generate_rotated_box};

/// Half extent of every obstacle cube.
pub const OBSTACLE_HALF_EXTENT: f32 = 2.0;

/// Rotor spin rate (radians per second).
const ROTOR_SPEED: f32 = 12.0;

const BODY_COLOR: [f32; 4] = [0.30, 0.34, 0.48, 1.0];
const COCKPIT_COLOR: [f32; 4] = [0.95, 0.75, 0.30, 1.0];
const WING_COLOR: [f32; 4] = [0.38, 0.42, 0.55, 1.0];
const ROTOR_COLOR: [f32; 4] = [0.14, 0.14, 0.17, 1.0];

/// Build the player craft at its field position.
///
/// A stubby body with cockpit, wings, tail fin and a twin-blade rotor.
/// The assembly tilts with the current lean angles; the rotor spins with
/// elapsed time on top of the tilt.
pub fn build_player_mesh(player: &Player, player_z: f32, time: f32) -> Mesh {
    let center = Vec3::new(player.x, player.y, player_z);

    // The craft noses toward +z, into the field. In this frame a climb
    // (positive pitch lean) and a right bank (positive roll lean) are both
    // negative rotations.
    let pitch = -player.pitch_lean.to_radians();
    let roll = -player.roll_lean.to_radians();
    let lean = Vec3::new(pitch, 0.0, roll);
    let lean_rot = Mat3::from_rotation_z(roll) * Mat3::from_rotation_x(pitch);

    let mut mesh = Mesh::new();
    let mut part = |offset: Vec3, half: Vec3, rotation: Vec3, color: [f32; 4]| {
        mesh.merge(&generate_rotated_box(
            center + lean_rot * offset,
            half,
            rotation,
            color,
        ));
    };

    // Hull
    part(Vec3::ZERO, Vec3::new(0.9, 0.5, 2.0), lean, BODY_COLOR);
    part(
        Vec3::new(0.0, 0.55, 0.8),
        Vec3::new(0.5, 0.3, 0.6),
        lean,
        COCKPIT_COLOR,
    );
    part(
        Vec3::new(0.0, 0.7, -1.6),
        Vec3::new(0.12, 0.6, 0.5),
        lean,
        BODY_COLOR,
    );

    // Wings
    part(
        Vec3::new(-1.9, -0.1, 0.2),
        Vec3::new(1.6, 0.12, 0.7),
        lean,
        WING_COLOR,
    );
    part(
        Vec3::new(1.9, -0.1, 0.2),
        Vec3::new(1.6, 0.12, 0.7),
        lean,
        WING_COLOR,
    );

    // Rotor: two crossed blades above the hull, yaw spin on top of the lean.
    let spin = time * ROTOR_SPEED;
    let blade_half = Vec3::new(2.4, 0.06, 0.22);
    part(
        Vec3::new(0.0, 1.0, 0.0),
        blade_half,
        Vec3::new(pitch, spin, roll),
        ROTOR_COLOR,
    );
    part(
        Vec3::new(0.0, 1.0, 0.0),
        blade_half,
        Vec3::new(pitch, spin + std::f32::consts::FRAC_PI_2, roll),
        ROTOR_COLOR,
    );

    mesh
}

/// Build the full scene mesh for one frame: the craft plus every obstacle
/// tinted by the active level.
pub fn build_scene_mesh(state: &GameState) -> Mesh {
    let mut mesh = build_player_mesh(
        &state.player,
        state.config.field.player_z,
        state.elapsed,
    );
    if let Some(level) = &state.level {
        state
            .obstacles
            .draw_all(&mut mesh, OBSTACLE_HALF_EXTENT, level.obstacle_tint);
    }
    mesh
}

/// Build the backdrop quad sitting on the far fog wall.
///
/// Centered on the camera axis; the side length comes from the field
/// depth over the cosine of the half fov, which keeps the quad larger
/// than the frustum cross-section at that depth.
pub fn build_background_quad(center_x: f32, center_y: f32, depth: f32, fov: f32) -> TexMesh {
    let half = depth / (fov * 0.5).cos();

    let mut mesh = TexMesh::new();
    mesh.vertices = vec![
        TexVertex {
            position: [center_x - half, center_y - half, depth],
            uv: [0.0, 1.0],
        },
        TexVertex {
            position: [center_x + half, center_y - half, depth],
            uv: [1.0, 1.0],
        },
        TexVertex {
            position: [center_x + half, center_y + half, depth],
            uv: [1.0, 0.0],
        },
        TexVertex {
            position: [center_x - half, center_y + half, depth],
            uv: [0.0, 0.0],
        },
    ];
    mesh.indices = vec![0, 1, 2, 0, 2, 3];
    mesh
}
