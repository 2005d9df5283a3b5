fn validate(source: &str) {
    let module = naga::front::wgsl::parse_str(source).expect("shader failed to parse");
    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .expect("shader failed to validate");
}

#[test]
fn phong_shader_is_valid() {
    validate(include_str!("../src/pipelines/phong.wgsl"));
}

#[test]
fn light_shader_is_valid() {
    validate(include_str!("../src/pipelines/light.wgsl"));
}

#[test]
fn vertex_inputs_match_the_csv_layout() {
    let source = include_str!("../src/pipelines/phong.wgsl");
    for location in [
        "@location(0) position: vec3<f32>",
        "@location(1) color: vec3<f32>",
        "@location(2) normal: vec3<f32>",
        "@location(3) tex_coords: vec2<f32>",
    ] {
        assert!(source.contains(location), "missing {location}");
    }
}
