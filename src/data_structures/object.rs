//! A renderable object built from one CSV file.

use std::path::PathBuf;

use wgpu::util::DeviceExt;

use crate::data_structures::{texture::Texture, vertex::CsvVertex};

/// Where to load an object from, relative to the asset root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectSource {
    pub csv: PathBuf,
    pub texture: Option<PathBuf>,
}

impl ObjectSource {
    pub fn new(csv: impl Into<PathBuf>, texture: impl Into<PathBuf>) -> Self {
        Self {
            csv: csv.into(),
            texture: Some(texture.into()),
        }
    }

    /// An object drawn with its vertex colours.
    pub fn untextured(csv: impl Into<PathBuf>) -> Self {
        Self {
            csv: csv.into(),
            texture: None,
        }
    }

    /// The CSV file stem, used to label GPU resources and log lines.
    pub fn name(&self) -> String {
        self.csv
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.csv.display().to_string())
    }
}

/// Per-object shader flags.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    draw_texture: u32,
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use padding here
    _padding: [u32; 3],
}

impl ObjectUniform {
    pub fn new(draw_texture: bool) -> Self {
        Self {
            draw_texture: draw_texture as u32,
            _padding: [0; 3],
        }
    }

    pub fn draw_texture(&self) -> bool {
        self.draw_texture != 0
    }
}

/// GPU side of a CSV object: vertex buffer, texture and the flags it is drawn with.
///
/// Objects are drawn as a plain triangle list of `num_vertices` vertices, with
/// an identity model transform.
#[derive(Debug)]
pub struct SceneObject {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub texture: Texture,
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub num_vertices: u32,
    pub draw_texture: bool,
}

impl SceneObject {
    /// Upload vertices and bind the texture.
    ///
    /// `texture` is `None` when the object has no texture or its texture
    /// failed to load; the object then renders with its vertex colours.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        name: &str,
        vertices: &[CsvVertex],
        texture: Option<Texture>,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let draw_texture = texture.is_some();
        let texture = texture.unwrap_or_else(|| Texture::create_placeholder(device, queue));

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Object Uniform", name)),
            contents: bytemuck::cast_slice(&[ObjectUniform::new(draw_texture)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
            label: Some(name),
        });

        Self {
            name: name.to_string(),
            vertex_buffer,
            texture,
            uniform_buffer,
            bind_group,
            num_vertices: vertices.len() as u32,
            draw_texture,
        }
    }
}
