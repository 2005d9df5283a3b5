//! csv-renderer
//!
//! A minimal real-time renderer: vertex data is read from `;`-separated CSV
//! files, uploaded to the GPU and drawn as a Phong-lit scene with one animated
//! light under a first-person camera.
//!
//! High-level modules
//! - `camera`: camera, projection, input controller and camera uniform
//! - `config`: renderer settings and the default scene description
//! - `context`: GPU and window context that owns device/queue/pipelines
//! - `data_structures`: vertices, textures and scene objects
//! - `flow`: the application event loop and [`flow::run`]
//! - `pipelines`: the Phong and light render pipelines
//! - `render`: draw submission for a loaded scene
//! - `resources`: CSV parsing and asset loading
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;

pub use config::RendererConfig;
pub use resources::csv::{parse_csv, read_csv_file};
