//! Engine data structures: vertices, textures and scene objects.
//!
//! - `vertex` holds the 11-float vertex layout shared by all CSV objects
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `object` is one CSV file uploaded to the GPU, with its texture
//! - `scene` is the ordered list of objects plus the light object

pub mod object;
pub mod scene;
pub mod texture;
pub mod vertex;
