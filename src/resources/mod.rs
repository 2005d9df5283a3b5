use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    config::RendererConfig,
    data_structures::{
        object::{ObjectSource, SceneObject},
        scene::Scene,
        vertex::vertices_from_floats,
    },
    resources::texture::try_load_texture,
};

/**
 * This module contains all logic for loading CSV objects and textures from external files.
 */
pub mod csv;
pub mod texture;

fn asset_path(asset_root: &Path, file_name: &Path) -> PathBuf {
    asset_root.join(file_name)
}

pub async fn load_binary(asset_root: &Path, file_name: &Path) -> anyhow::Result<Vec<u8>> {
    let path = asset_path(asset_root, file_name);
    let data =
        std::fs::read(&path).with_context(|| format!("Could not open file {}", path.display()))?;
    Ok(data)
}

/// Read a CSV object and upload it to the GPU.
///
/// A missing CSV file is an error. A texture that can't be loaded is logged
/// and the object falls back to its vertex colours.
pub async fn load_scene_object(
    asset_root: &Path,
    source: &ObjectSource,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
) -> anyhow::Result<SceneObject> {
    let name = source.name();
    let floats = csv::read_csv_file(asset_path(asset_root, &source.csv))?;
    let vertices = vertices_from_floats(&floats);
    if vertices.is_empty() {
        log::warn!(
            "{} contains no complete vertex and will not be drawn.",
            source.csv.display()
        );
    }

    let texture = match &source.texture {
        Some(file_name) => try_load_texture(asset_root, file_name, device, queue).await,
        None => None,
    };

    let object = SceneObject::new(device, queue, layout, &name, &vertices, texture);
    log::info!(
        "Loaded {} ({} vertices, textured: {})",
        name,
        object.num_vertices,
        object.draw_texture
    );
    Ok(object)
}

/// Load every configured object and the light object.
///
/// Objects keep the order of `config.objects`, which is also their draw order.
pub async fn load_scene(
    config: &RendererConfig,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
) -> anyhow::Result<Scene> {
    let asset_root = config.asset_root.as_path();

    let object_futures = config
        .objects
        .iter()
        .map(|source| load_scene_object(asset_root, source, device, queue, layout));
    let objects = futures::future::join_all(object_futures)
        .await
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()?;

    let light = load_scene_object(asset_root, &config.light.source, device, queue, layout)
        .await
        .context("Failed to load the light object")?;

    Ok(Scene { objects, light })
}
