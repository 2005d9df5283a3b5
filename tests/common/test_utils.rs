#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

/// One vertex per row: position, colour, normal, texture coordinates.
pub(crate) const TRIANGLE_ROWS: &str = "\
0;0;0;1;0;0;0;0;1;0;0
1;0;0;0;1;0;0;0;1;1;0
0;1;0;0;0;1;0;0;1;0;1
";

pub(crate) fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub(crate) fn shipped_assets() -> PathBuf {
    manifest_dir().join("assets")
}

/// Write `contents` to `dir/name`, creating parent directories.
pub(crate) fn write_asset(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create asset directory");
    }
    fs::write(&path, contents).expect("failed to write asset");
    path
}

#[cfg(feature = "integration-tests")]
pub(crate) struct Gpu {
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
}

/// A device without a surface, for upload tests.
#[cfg(feature = "integration-tests")]
pub(crate) fn headless_gpu(runtime: &tokio::runtime::Runtime) -> Gpu {
    runtime.block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("no GPU adapter available for integration tests");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("test device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .expect("failed to create a GPU device");
        Gpu { device, queue }
    })
}
