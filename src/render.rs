//! Draw submission for scene objects.
//!
//! [`DrawObject`] extends `wgpu::RenderPass` with the two kinds of draws the
//! renderer issues, and [`draw_scene`] submits a whole [`Scene`] in order:
//! static objects first with the Phong pipeline, then the light object.

use crate::{context::Context, data_structures::object::SceneObject, data_structures::scene::Scene};

pub trait DrawObject<'a> {
    /// Draw a static object. Expects the Phong pipeline to be set.
    fn draw_object(
        &mut self,
        object: &'a SceneObject,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );

    /// Draw the light object. Expects the light pipeline to be set.
    fn draw_light_object(
        &mut self,
        object: &'a SceneObject,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_object(
        &mut self,
        object: &'b SceneObject,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, object.vertex_buffer.slice(..));
        self.set_bind_group(0, &object.bind_group, &[]);
        self.set_bind_group(1, camera_bind_group, &[]);
        self.set_bind_group(2, light_bind_group, &[]);
        self.draw(0..object.num_vertices, 0..1);
    }

    fn draw_light_object(
        &mut self,
        object: &'b SceneObject,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, object.vertex_buffer.slice(..));
        self.set_bind_group(0, camera_bind_group, &[]);
        self.set_bind_group(1, light_bind_group, &[]);
        self.draw(0..object.num_vertices, 0..1);
    }
}

/// Objects in submission order, skipping the ones without vertices.
pub fn draw_order(scene: &Scene) -> impl Iterator<Item = &SceneObject> {
    scene
        .objects
        .iter()
        .filter(|object| object.num_vertices > 0)
}

pub fn draw_scene<'a>(ctx: &'a Context, scene: &'a Scene, render_pass: &mut wgpu::RenderPass<'a>) {
    render_pass.set_pipeline(&ctx.pipelines.phong);
    for object in draw_order(scene) {
        render_pass.draw_object(object, &ctx.camera.bind_group, &ctx.light.bind_group);
    }

    if scene.light.num_vertices > 0 {
        render_pass.set_pipeline(&ctx.pipelines.light);
        render_pass.draw_light_object(&scene.light, &ctx.camera.bind_group, &ctx.light.bind_group);
    }
}
