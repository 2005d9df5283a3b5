use wgpu::util::DeviceExt;
use winit::{event::ElementState, keyboard::KeyCode};

use crate::config::{LightConfig, SpecularConfig};

#[derive(Debug)]
pub struct LightResources {
    pub uniform: LightUniform,
    pub orbit: LightOrbit,
    pub specular: SpecularControl,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(device: &wgpu::Device, light: &LightConfig, specular: &SpecularConfig) -> Self {
        let specular = SpecularControl::new(specular);
        let uniform = LightUniform {
            position: light.position,
            scale: light.scale,
            color: light.color,
            specular_strength: specular.strength(),
        };
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            orbit: LightOrbit::new(light.orbit_radius),
            specular,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Move the light along its orbit and pick up the current specular strength.
    pub fn update(&mut self, elapsed_secs: f32) {
        self.uniform.position = self.orbit.position_at(elapsed_secs);
        self.specular.update();
        self.uniform.specular_strength = self.specular.strength();
    }

    pub fn write_to_buffer(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    // fills the 16 byte slot after `position`
    pub scale: f32,
    pub color: [f32; 3],
    pub specular_strength: f32,
}

/// Circular-ish path of the light around the origin.
#[derive(Debug, Clone, Copy)]
pub struct LightOrbit {
    radius: f32,
}

impl LightOrbit {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// `(sin t, sin t, cos t) * radius` for `t` seconds since start-up.
    pub fn position_at(&self, t: f32) -> [f32; 3] {
        let (sin, cos) = t.sin_cos();
        [sin * self.radius, sin * self.radius, cos * self.radius]
    }
}

/// Specular strength adjusted with held keys: O raises it, L lowers it.
///
/// Every frame a key is held moves the value by one step, clamped to the
/// configured range.
#[derive(Debug, Clone)]
pub struct SpecularControl {
    strength: f32,
    step: f32,
    min: f32,
    max: f32,
    increasing: bool,
    decreasing: bool,
}

impl SpecularControl {
    pub fn new(config: &SpecularConfig) -> Self {
        Self {
            strength: config.initial.clamp(config.min, config.max),
            step: config.step,
            min: config.min,
            max: config.max,
            increasing: false,
            decreasing: false,
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Returns whether the key controls the specular strength.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        match key {
            KeyCode::KeyO => {
                self.increasing = state.is_pressed();
                true
            }
            KeyCode::KeyL => {
                self.decreasing = state.is_pressed();
                true
            }
            _ => false,
        }
    }

    /// Stop adjusting, as if both keys were released.
    pub fn reset(&mut self) {
        self.increasing = false;
        self.decreasing = false;
    }

    pub fn update(&mut self) {
        if self.increasing {
            self.strength = (self.strength + self.step).min(self.max);
            log::info!("Specular strength = {}", self.strength);
        }
        if self.decreasing {
            self.strength = (self.strength - self.step).max(self.min);
            log::info!("Specular strength = {}", self.strength);
        }
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Uniform Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("light_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("light_bind_group"),
    })
}

/// Pipeline for the light object: flat white, positioned and scaled by the light uniform.
pub fn mk_render_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    light_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    super::mk_csv_pipeline(
        device,
        "Light Pipeline",
        config,
        &[camera_bind_group_layout, light_bind_group_layout],
        wgpu::BlendState::REPLACE,
        include_str!("light.wgsl"),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn control() -> SpecularControl {
        SpecularControl::new(&SpecularConfig::default())
    }

    #[test]
    fn uniform_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 32);
    }

    #[test]
    fn orbit_starts_on_the_z_axis() {
        let orbit = LightOrbit::new(2.0);
        let [x, y, z] = orbit.position_at(0.0);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 0.0);
        assert_relative_eq!(z, 2.0);

        let [x, y, z] = orbit.position_at(std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(y, 2.0, epsilon = 1e-6);
        assert_relative_eq!(z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn specular_changes_only_while_key_is_held() {
        let mut specular = control();
        specular.update();
        assert_relative_eq!(specular.strength(), 0.5);

        assert!(specular.handle_key(KeyCode::KeyO, ElementState::Pressed));
        specular.update();
        specular.update();
        assert_relative_eq!(specular.strength(), 0.52, epsilon = 1e-6);

        specular.handle_key(KeyCode::KeyO, ElementState::Released);
        specular.update();
        assert_relative_eq!(specular.strength(), 0.52, epsilon = 1e-6);

        specular.handle_key(KeyCode::KeyL, ElementState::Pressed);
        specular.update();
        assert_relative_eq!(specular.strength(), 0.51, epsilon = 1e-6);
        assert!(!specular.handle_key(KeyCode::KeyW, ElementState::Pressed));
    }

    #[test]
    fn reset_stops_a_held_key() {
        let mut specular = control();
        specular.handle_key(KeyCode::KeyO, ElementState::Pressed);
        specular.update();
        specular.reset();
        for _ in 0..10 {
            specular.update();
        }
        assert_relative_eq!(specular.strength(), 0.51, epsilon = 1e-6);
    }

    #[test]
    fn specular_is_clamped() {
        let mut specular = control();
        specular.handle_key(KeyCode::KeyL, ElementState::Pressed);
        for _ in 0..100 {
            specular.update();
        }
        assert_eq!(specular.strength(), 0.0);

        specular.handle_key(KeyCode::KeyL, ElementState::Released);
        specular.handle_key(KeyCode::KeyO, ElementState::Pressed);
        for _ in 0..1000 {
            specular.update();
        }
        assert_eq!(specular.strength(), 5.0);
    }
}
