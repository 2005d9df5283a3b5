//! Render pipelines.
//!
//! - `phong` draws the static scene objects with Phong lighting
//! - `light` draws the light object and owns the light uniform and its animation
//!
//! Both consume [`CsvVertex`] buffers, write the depth buffer and use the
//! `vs_main`/`fs_main` entry points of their WGSL file.

use crate::data_structures::{
    texture::DepthTexture,
    vertex::{CsvVertex, Vertex},
};

pub mod light;
pub mod phong;

/// Pipelines created once at start-up and reused every frame.
#[derive(Debug)]
pub struct Pipelines {
    pub phong: wgpu::RenderPipeline,
    pub light: wgpu::RenderPipeline,
}

pub(crate) fn mk_csv_pipeline(
    device: &wgpu::Device,
    label: &str,
    config: &wgpu::SurfaceConfiguration,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    blend: wgpu::BlendState,
    wgsl: &'static str,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(&format!("{label} Layout")),
        bind_group_layouts,
        push_constant_ranges: &[],
    });
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(wgsl.into()),
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[CsvVertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: config.format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        // Triangle lists, both faces: CSV files don't guarantee a winding order
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DepthTexture::FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: Default::default(),
        multiview: None,
    })
}
