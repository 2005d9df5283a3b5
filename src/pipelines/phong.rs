/// Pipeline for the static scene objects.
///
/// Bind groups: 0 object (texture, sampler, flags), 1 camera, 2 light.
/// Alpha blending is on since textures such as window panes carry transparency.
pub fn mk_phong_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    object_bind_group_layout: &wgpu::BindGroupLayout,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    light_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    super::mk_csv_pipeline(
        device,
        "Phong Pipeline",
        config,
        &[
            object_bind_group_layout,
            camera_bind_group_layout,
            light_bind_group_layout,
        ],
        wgpu::BlendState::ALPHA_BLENDING,
        include_str!("phong.wgsl"),
    )
}
