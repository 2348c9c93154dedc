//! GPU Uniform Buffers
//!
//! CPU-side mirrors of the uniform blocks declared in `shader.rs`.
//! WGSL aligns vec3 fields to 16 bytes, so every vec3 here is followed
//! by a scalar that fills the slot; sizes are pinned by asserts.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Uniforms for the fogged scene pipeline
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub time: f32,
    pub sun_dir: [f32; 3],
    pub ambient: f32,
    pub fog_color: [f32; 3],
    pub fog_start: f32,
    pub fog_end: f32,
    pub _padding: [f32; 3],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [25.0, 25.0, -20.0],
            time: 0.0,
            sun_dir: [-0.5, 1.0, 0.25],
            ambient: 0.2,
            fog_color: [0.72, 0.78, 0.88],
            fog_start: 50.0,
            fog_end: 100.0,
            _padding: [0.0; 3],
        }
    }
}

static_assertions::assert_eq_size!(SceneUniforms, [u8; 128]);

// Uniform buffers must be sized in 16-byte blocks
const _: () = assert!(std::mem::size_of::<SceneUniforms>() % 16 == 0);

/// Uniforms for the backdrop pipeline
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct BackgroundUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub tint: [f32; 4],
}

impl Default for BackgroundUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            tint: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

static_assertions::assert_eq_size!(BackgroundUniforms, [u8; 80]);

const _: () = assert!(std::mem::size_of::<BackgroundUniforms>() % 16 == 0);
