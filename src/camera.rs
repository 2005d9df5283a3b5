//! First-person camera, projection and input controller.
//!
//! The camera flies freely: W/S move along the view direction, A/D strafe,
//! the cursor turns the view and the scroll wheel zooms by narrowing the field
//! of view.

use cgmath::*;
use instant::Duration;
use wgpu::util::DeviceExt;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::config::CameraConfig;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const WORLD_UP: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);
const MAX_PITCH: Deg<f32> = Deg(89.0);

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Unit vector the camera looks along.
    pub fn front(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(WORLD_UP).normalize()
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let up = self.right().cross(self.front()).normalize();
        Matrix4::look_to_rh(self.position, self.front(), up)
    }
}

#[derive(Debug, Clone)]
pub struct Projection {
    aspect: f32,
    pub fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Turns keyboard, cursor and scroll input into camera movement.
///
/// Input events only record what happened; [`update`](Self::update) applies it
/// once per frame.
#[derive(Debug)]
pub struct CameraController {
    amount_forward: f32,
    amount_backward: f32,
    amount_left: f32,
    amount_right: f32,
    rotate_horizontal: f32,
    rotate_vertical: f32,
    scroll: f32,
    last_cursor: Option<PhysicalPosition<f64>>,
    speed: f32,
    sensitivity: f32,
    min_zoom: Deg<f32>,
    max_zoom: Deg<f32>,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            amount_forward: 0.0,
            amount_backward: 0.0,
            amount_left: 0.0,
            amount_right: 0.0,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            scroll: 0.0,
            last_cursor: None,
            speed,
            sensitivity,
            min_zoom: Deg(1.0),
            max_zoom: Deg(45.0),
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            min_zoom: Deg(config.min_zoom),
            max_zoom: Deg(config.max_zoom),
            ..Self::new(config.speed, config.sensitivity)
        }
    }

    /// Returns whether the key moves the camera.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let amount = if state.is_pressed() { 1.0 } else { 0.0 };
        match key {
            KeyCode::KeyW => {
                self.amount_forward = amount;
                true
            }
            KeyCode::KeyS => {
                self.amount_backward = amount;
                true
            }
            KeyCode::KeyA => {
                self.amount_left = amount;
                true
            }
            KeyCode::KeyD => {
                self.amount_right = amount;
                true
            }
            _ => false,
        }
    }

    /// Forget held keys and the cursor reference point.
    ///
    /// Called when the window loses focus, since key releases are not
    /// delivered to an unfocused window.
    pub fn reset(&mut self) {
        self.amount_forward = 0.0;
        self.amount_backward = 0.0;
        self.amount_left = 0.0;
        self.amount_right = 0.0;
        self.last_cursor = None;
    }

    /// Record a cursor position. The first position only sets the reference
    /// point so the view doesn't jump when the cursor enters the window.
    pub fn handle_cursor(&mut self, position: PhysicalPosition<f64>) {
        if let Some(last) = self.last_cursor {
            self.rotate_horizontal += (position.x - last.x) as f32;
            // reversed since window y-coordinates grow downwards
            self.rotate_vertical += (last.y - position.y) as f32;
        }
        self.last_cursor = Some(position);
    }

    pub fn handle_scroll(&mut self, delta: &MouseScrollDelta) {
        self.scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            // roughly one line per 20 pixels on touchpads
            MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / 20.0,
        };
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => self.handle_key(*key, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor(*position);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                false
            }
            WindowEvent::Focused(false) => {
                self.reset();
                false
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_scroll(delta);
                true
            }
            _ => false,
        }
    }

    pub fn update(&mut self, camera: &mut Camera, projection: &mut Projection, dt: Duration) {
        let dt = dt.as_secs_f32();
        let velocity = self.speed * dt;

        let front = camera.front();
        let right = camera.right();
        camera.position += front * (self.amount_forward - self.amount_backward) * velocity;
        camera.position += right * (self.amount_right - self.amount_left) * velocity;

        camera.yaw += Rad::from(Deg(self.rotate_horizontal * self.sensitivity));
        camera.pitch += Rad::from(Deg(self.rotate_vertical * self.sensitivity));
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;

        let max_pitch = Rad::from(MAX_PITCH);
        if camera.pitch < -max_pitch {
            camera.pitch = -max_pitch;
        } else if camera.pitch > max_pitch {
            camera.pitch = max_pitch;
        }

        if self.scroll != 0.0 {
            let zoom = Deg::from(projection.fovy).0 - self.scroll;
            projection.fovy = Deg(zoom.clamp(self.min_zoom.0, self.max_zoom.0)).into();
            self.scroll = 0.0;
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera state together with the GPU resources it is uploaded to.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: CameraController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, config: &CameraConfig, projection: &Projection) -> Self {
        let camera = Camera::new(config.position, Deg(config.yaw), Deg(config.pitch));
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, projection);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                // the fragment stage needs the view position for specular light
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            controller: CameraController::from_config(config),
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Recompute the view-projection matrix and upload it.
    pub fn write_to_buffer(&mut self, queue: &wgpu::Queue, projection: &Projection) {
        self.uniform.update_view_proj(&self.camera, projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
