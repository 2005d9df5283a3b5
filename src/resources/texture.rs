use std::path::Path;

use crate::{data_structures::texture::Texture, resources::load_binary};

/// Bind group layout of a scene object: texture, sampler and `ObjectUniform`.
pub fn object_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
        label: Some("object_bind_group_layout"),
    })
}

pub async fn load_texture(
    asset_root: &Path,
    file_name: &Path,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let data = load_binary(asset_root, file_name).await?;
    Texture::from_bytes(device, queue, &data, &file_name.to_string_lossy())
}

/// Load an object texture, logging instead of failing.
///
/// Returns `None` when the file is missing or can't be decoded.
pub async fn try_load_texture(
    asset_root: &Path,
    file_name: &Path,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> Option<Texture> {
    match load_texture(asset_root, file_name, device, queue).await {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::error!("Failed to load texture {}: {:#}", file_name.display(), e);
            None
        }
    }
}
