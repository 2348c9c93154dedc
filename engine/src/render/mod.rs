//! Render Module
//!
//! Core rendering infrastructure: wgpu device/surface setup with depth
//! buffering, the three render pipelines (scene, backdrop, UI) and PNG
//! texture loading for the backdrop billboard.

pub mod gpu_context;
pub mod texture;

// Re-export commonly used types for convenience
pub use gpu_context::{GpuContext, GpuContextConfig, mesh_vertex_layout, textured_vertex_layout};
pub use texture::{Texture, TextureError};
