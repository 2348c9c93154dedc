//! Texture Loading
//!
//! Decodes a PNG from disk and uploads it as an RGBA8 sRGB texture with
//! a linear clamp-to-edge sampler. The caller owns bind group assembly
//! so the view and sampler can share a group with uniform buffers.

use std::path::Path;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a texture from disk.
#[derive(Debug)]
pub enum TextureError {
    /// File could not be read.
    Io(std::io::Error),
    /// File bytes are not a decodable image.
    Decode(image::ImageError),
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::Io(e) => write!(f, "IO error: {e}"),
            TextureError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for TextureError {}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::Decode(e)
    }
}

// ============================================================================
// TEXTURE
// ============================================================================

/// A 2D color texture uploaded to the GPU.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: (u32, u32),
}

/// Read and decode an image file into tightly packed RGBA8 pixels.
fn decode_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32), TextureError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok((img.into_raw(), width, height))
}

impl Texture {
    /// Load an image file and upload it as an `Rgba8UnormSrgb` texture.
    pub fn from_file(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self, TextureError> {
        let (pixels, width, height) = decode_rgba(path)?;
        log::info!(
            "[Assets] Loaded texture {} ({}x{})",
            path.display(),
            width,
            height
        );

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&format!("Texture {}", path.display())),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("Sampler {}", path.display())),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
            size: (width, height),
        })
    }
}
