//! The loaded scene: static objects in draw order plus the light object.

use crate::data_structures::object::SceneObject;

#[derive(Debug)]
pub struct Scene {
    /// Drawn with the Phong pipeline, in this order.
    pub objects: Vec<SceneObject>,
    /// Drawn last, at the light's position.
    pub light: SceneObject,
}

impl Scene {
    pub fn total_vertices(&self) -> u32 {
        self.objects
            .iter()
            .map(|object| object.num_vertices)
            .sum::<u32>()
            + self.light.num_vertices
    }
}
