use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use crate::{
    camera::{CameraResources, Projection},
    config::RendererConfig,
    data_structures::texture::DepthTexture,
    pipelines::{self, Pipelines, light::LightResources},
    resources::texture::object_layout,
};

/// Everything the render loop needs from the GPU: device, surface, uniforms and pipelines.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: DepthTexture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub light: LightResources,
    pub object_layout: wgpu::BindGroupLayout,
    pub pipelines: Pipelines,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>, settings: &RendererConfig) -> anyhow::Result<Self> {
        let (surface, adapter) = open_surface(window.clone()).await?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to create the GPU device")?;

        let size = window.inner_size();
        let config = surface_config(&surface, &adapter, size.width, size.height)?;

        let camera_settings = &settings.camera;
        let projection = Projection::new(
            config.width,
            config.height,
            cgmath::Deg(camera_settings.zoom),
            camera_settings.znear,
            camera_settings.zfar,
        );
        let camera = CameraResources::new(&device, camera_settings, &projection);
        let light = LightResources::new(&device, &settings.light, &settings.specular);
        let object_layout = object_layout(&device);

        let pipelines = Pipelines {
            phong: pipelines::phong::mk_phong_pipeline(
                &device,
                &config,
                &object_layout,
                &camera.bind_group_layout,
                &light.bind_group_layout,
            ),
            light: pipelines::light::mk_render_pipeline(
                &device,
                &config,
                &camera.bind_group_layout,
                &light.bind_group_layout,
            ),
        };
        let depth_texture = DepthTexture::new(&device, [config.width, config.height], "depth_texture");

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            light,
            object_layout,
            pipelines,
            clear_colour: settings.clear_colour,
        })
    }

    /// Recompute the camera uniform and upload it.
    pub fn write_camera_buffer(&mut self) {
        self.camera.write_to_buffer(&self.queue, &self.projection);
    }
}

async fn open_surface(
    window: Arc<Window>,
) -> anyhow::Result<(wgpu::Surface<'static>, wgpu::Adapter)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });
    let surface = instance
        .create_surface(window)
        .context("Failed to create a surface for the window")?;
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("No compatible GPU adapter found")?;

    let info = adapter.get_info();
    log::info!("Using {} ({:?})", info.name, info.backend);
    Ok((surface, adapter))
}

/// Prefers an sRGB format, the shaders output linear colour.
fn surface_config(
    surface: &wgpu::Surface,
    adapter: &wgpu::Adapter,
    width: u32,
    height: u32,
) -> anyhow::Result<wgpu::SurfaceConfiguration> {
    let caps = surface.get_capabilities(adapter);
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| caps.formats.first().copied())
        .context("The surface supports no texture format")?;
    Ok(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: caps
            .present_modes
            .first()
            .copied()
            .unwrap_or(wgpu::PresentMode::Fifo),
        alpha_mode: caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto),
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}
