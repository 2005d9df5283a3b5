#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_upload_csv_object_without_texture() {
    use csv_renderer::{
        data_structures::object::ObjectSource,
        resources::{load_scene_object, texture::object_layout},
    };

    use crate::common::test_utils::{TRIANGLE_ROWS, headless_gpu, write_asset};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let gpu = headless_gpu(&runtime);
    let layout = object_layout(&gpu.device);
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "triangle.csv", TRIANGLE_ROWS.as_bytes());

    // the texture doesn't exist: logged and ignored
    let source = ObjectSource::new("triangle.csv", "nope.png");
    let object = runtime
        .block_on(load_scene_object(
            dir.path(),
            &source,
            &gpu.device,
            &gpu.queue,
            &layout,
        ))
        .unwrap();

    assert_eq!(object.name, "triangle");
    assert_eq!(object.num_vertices, 3);
    assert!(!object.draw_texture);
    assert_eq!(object.vertex_buffer.size(), 3 * 44);
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_fail_on_missing_csv() {
    use csv_renderer::{
        data_structures::object::ObjectSource,
        resources::{load_scene_object, texture::object_layout},
    };

    use crate::common::test_utils::headless_gpu;

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let gpu = headless_gpu(&runtime);
    let layout = object_layout(&gpu.device);
    let dir = tempfile::tempdir().unwrap();

    let result = runtime.block_on(load_scene_object(
        dir.path(),
        &ObjectSource::untextured("gone.csv"),
        &gpu.device,
        &gpu.queue,
        &layout,
    ));
    assert!(result.is_err());
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_load_default_scene_in_draw_order() {
    use csv_renderer::{
        RendererConfig,
        resources::{load_scene, texture::object_layout},
    };

    use crate::common::test_utils::{headless_gpu, shipped_assets};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let gpu = headless_gpu(&runtime);
    let layout = object_layout(&gpu.device);
    let config = RendererConfig::default().with_asset_root(shipped_assets());

    let scene = runtime
        .block_on(load_scene(&config, &gpu.device, &gpu.queue, &layout))
        .unwrap();

    let names: Vec<_> = scene.objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["garden", "walls", "door", "window", "ceiling", "rooftop"]
    );
    assert!(scene.objects.iter().all(|o| o.draw_texture));
    assert_eq!(scene.light.name, "sun");
    assert_eq!(scene.light.num_vertices, 36);
    assert!(!scene.light.draw_texture);
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_name_the_missing_csv_when_scene_fails() {
    use csv_renderer::{
        RendererConfig,
        data_structures::object::ObjectSource,
        resources::{load_scene, texture::object_layout},
    };

    use crate::common::test_utils::{TRIANGLE_ROWS, headless_gpu, write_asset};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let gpu = headless_gpu(&runtime);
    let layout = object_layout(&gpu.device);
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "resources/sun.csv", TRIANGLE_ROWS.as_bytes());
    write_asset(dir.path(), "walls.csv", TRIANGLE_ROWS.as_bytes());

    let config = RendererConfig::default()
        .with_asset_root(dir.path())
        .with_objects(vec![
            ObjectSource::untextured("walls.csv"),
            ObjectSource::untextured("porch.csv"),
        ]);
    let err = runtime
        .block_on(load_scene(&config, &gpu.device, &gpu.queue, &layout))
        .unwrap_err();

    assert!(format!("{err:#}").contains("porch.csv"));
}

#[test]
#[cfg(feature = "integration-tests")]
fn should_skip_empty_objects_when_drawing() {
    use csv_renderer::{
        RendererConfig,
        data_structures::object::ObjectSource,
        render::draw_order,
        resources::{load_scene, texture::object_layout},
    };

    use crate::common::test_utils::{TRIANGLE_ROWS, headless_gpu, write_asset};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let gpu = headless_gpu(&runtime);
    let layout = object_layout(&gpu.device);
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "resources/sun.csv", TRIANGLE_ROWS.as_bytes());
    write_asset(dir.path(), "floor.csv", TRIANGLE_ROWS.as_bytes());
    write_asset(dir.path(), "blank.csv", b"");
    // ten floats: not even one whole vertex
    write_asset(dir.path(), "stub.csv", b"1;2;3;4;5;6;7;8;9;10\n");
    write_asset(dir.path(), "roof.csv", TRIANGLE_ROWS.as_bytes());

    let config = RendererConfig::default()
        .with_asset_root(dir.path())
        .with_objects(
            ["floor.csv", "blank.csv", "stub.csv", "roof.csv"]
                .into_iter()
                .map(ObjectSource::untextured)
                .collect(),
        );
    let scene = runtime
        .block_on(load_scene(&config, &gpu.device, &gpu.queue, &layout))
        .unwrap();

    assert_eq!(scene.objects.len(), 4);
    let drawn: Vec<_> = draw_order(&scene).map(|o| o.name.as_str()).collect();
    assert_eq!(drawn, vec!["floor", "roof"]);
    assert_eq!(scene.total_vertices(), 9);
}
