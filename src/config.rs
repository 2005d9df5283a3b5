//! Renderer settings.
//!
//! [`RendererConfig::default`] describes the house scene shipped in `assets/`:
//! six textured objects and the sun. Every value can be overridden with the
//! `with_*` builders before calling [`crate::flow::run`].

use std::path::PathBuf;

use crate::data_structures::object::ObjectSource;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Degrees, -90 looks down the negative z axis.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pixel of cursor movement.
    pub sensitivity: f32,
    /// Field of view in degrees, changed by scrolling within `min_zoom..=max_zoom`.
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 6.0],
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: 45.0,
            min_zoom: 1.0,
            max_zoom: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightConfig {
    /// Geometry drawn at the light's position.
    pub source: ObjectSource,
    /// Position before the first frame.
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub orbit_radius: f32,
    /// Uniform scale applied to the light object.
    pub scale: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            source: ObjectSource::untextured("resources/sun.csv"),
            position: [1.2, 1.0, 2.0],
            color: [1.0, 1.0, 1.0],
            orbit_radius: 2.0,
            scale: 0.2,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpecularConfig {
    pub initial: f32,
    /// Change per frame while the increase/decrease key is held.
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SpecularConfig {
    fn default() -> Self {
        Self {
            initial: 0.5,
            step: 0.01,
            min: 0.0,
            max: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RendererConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    /// Directory all object and texture paths are relative to.
    pub asset_root: PathBuf,
    /// Static objects, drawn in this order.
    pub objects: Vec<ObjectSource>,
    pub light: LightConfig,
    pub camera: CameraConfig,
    pub specular: SpecularConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            title: "CSV Renderer".to_string(),
            width: 800,
            height: 600,
            clear_colour: wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.1,
                a: 1.0,
            },
            asset_root: PathBuf::from("assets"),
            objects: vec![
                ObjectSource::new("resources/garden.csv", "textures/grass.png"),
                ObjectSource::new("resources/walls.csv", "textures/wall.png"),
                ObjectSource::new("resources/door.csv", "textures/door.png"),
                ObjectSource::new("resources/window.csv", "textures/window.png"),
                ObjectSource::new("resources/ceiling.csv", "textures/ceiling.png"),
                ObjectSource::new("resources/rooftop.csv", "textures/rooftop.png"),
            ],
            light: LightConfig::default(),
            camera: CameraConfig::default(),
            specular: SpecularConfig::default(),
        }
    }
}

impl RendererConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_asset_root(mut self, asset_root: impl Into<PathBuf>) -> Self {
        self.asset_root = asset_root.into();
        self
    }

    pub fn with_objects(mut self, objects: Vec<ObjectSource>) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_light(mut self, light: LightConfig) -> Self {
        self.light = light;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_specular(mut self, specular: SpecularConfig) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_clear_colour(mut self, clear_colour: wgpu::Color) -> Self {
        self.clear_colour = clear_colour;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_draws_objects_in_house_order() {
        let config = RendererConfig::default();
        let names: Vec<_> = config.objects.iter().map(ObjectSource::name).collect();
        assert_eq!(
            names,
            vec!["garden", "walls", "door", "window", "ceiling", "rooftop"]
        );
        assert!(config.objects.iter().all(|o| o.texture.is_some()));
        assert!(config.light.source.texture.is_none());
    }

    #[test]
    fn default_window_and_camera() {
        let config = RendererConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "CSV Renderer");
        assert_eq!(config.camera.position, [0.0, 0.0, 6.0]);
        assert_eq!(config.camera.zoom, 45.0);
        assert_eq!(config.specular.initial, 0.5);
    }

    #[test]
    fn builders_override_defaults() {
        let config = RendererConfig::default()
            .with_title("test")
            .with_size(320, 240)
            .with_objects(vec![ObjectSource::untextured("cube.csv")]);
        assert_eq!(config.title, "test");
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.objects.len(), 1);
    }
}
