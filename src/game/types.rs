//! Shared Geometry Types
//!
//! Vertex formats and the CPU-side mesh structures every frame is built
//! from. The game rebuilds its meshes each frame and the render layer only
//! uploads them, so nothing here touches the GPU.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Vec3};

// ============================================================================
// GPU VERTEX TYPES
// ============================================================================

/// Lit vertex for the craft, the obstacles and UI quads
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(Vertex, [u8; 40]);

/// Textured vertex for the backdrop billboard, no lighting data
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TexVertex, [u8; 20]);

// ============================================================================
// MESH STRUCTURES
// ============================================================================

/// An indexed triangle mesh of lit vertices
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append another mesh, rebasing its indices past our own vertices.
    pub fn merge(&mut self, other: &Mesh) {
        let base_idx = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base_idx));
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// An indexed triangle mesh of textured vertices
pub struct TexMesh {
    pub vertices: Vec<TexVertex>,
    pub indices: Vec<u32>,
}

impl TexMesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl Default for TexMesh {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MESH GENERATION PRIMITIVES
// ============================================================================

/// Generate an axis-aligned box mesh with flat per-face normals
pub fn generate_box(center: Vec3, half_extents: Vec3, color: [f32; 4]) -> Mesh {
    generate_rotated_box(center, half_extents, Vec3::ZERO, color)
}

/// Generate a box rotated around its own center (for the leaning craft)
///
/// `rotation` holds Euler angles in radians, applied in X, Y, Z order.
/// Normals rotate with the corners so lighting tracks the tilt.
pub fn generate_rotated_box(
    center: Vec3,
    half_extents: Vec3,
    rotation: Vec3,
    color: [f32; 4],
) -> Mesh {
    let rot = Mat3::from_rotation_z(rotation.z)
        * Mat3::from_rotation_y(rotation.y)
        * Mat3::from_rotation_x(rotation.x);

    let (hx, hy, hz) = (half_extents.x, half_extents.y, half_extents.z);

    let corners: [Vec3; 8] = [
        Vec3::new(-hx, -hy, -hz),
        Vec3::new(hx, -hy, -hz),
        Vec3::new(hx, hy, -hz),
        Vec3::new(-hx, hy, -hz),
        Vec3::new(-hx, -hy, hz),
        Vec3::new(hx, -hy, hz),
        Vec3::new(hx, hy, hz),
        Vec3::new(-hx, hy, hz),
    ];

    // Four corner ids per face, wound CCW seen from outside, plus the
    // outward face normal.
    let faces: [([usize; 4], Vec3); 6] = [
        ([0, 3, 2, 1], Vec3::NEG_Z),
        ([4, 5, 6, 7], Vec3::Z),
        ([0, 4, 7, 3], Vec3::NEG_X),
        ([1, 2, 6, 5], Vec3::X),
        ([3, 7, 6, 2], Vec3::Y),
        ([0, 1, 5, 4], Vec3::NEG_Y),
    ];

    let mut mesh = Mesh::new();
    for (corner_ids, local_normal) in &faces {
        let base = mesh.vertices.len() as u32;
        let world_normal = rot * *local_normal;

        for &i in corner_ids {
            let pos = center + rot * corners[i];
            mesh.vertices.push(Vertex {
                position: [pos.x, pos.y, pos.z],
                normal: [world_normal.x, world_normal.y, world_normal.z],
                color,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}
