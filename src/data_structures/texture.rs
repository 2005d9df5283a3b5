//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around WGPU texture resources,
//! with helpers for depth textures, the white placeholder bound to untextured
//! objects, and decoding object textures from image file bytes.

use anyhow::*;

/// A GPU texture with a view and sampler.
///
/// Object textures are created via [`from_bytes`](Self::from_bytes), untextured
/// objects bind [`create_placeholder`](Self::create_placeholder).
#[derive(Clone, Debug)]
pub struct Texture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Depth buffer of the render target. Only ever used as an attachment.
#[derive(Clone, Debug)]
pub struct DepthTexture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Standard depth buffer texture format (32-bit float).
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture for depth-testing during rendering.
    ///
    /// # Arguments
    ///
    /// * `size` is [width, height] of the texture in pixels
    /// * `label` is used as a debug label for the GPU resource
    pub fn new(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: size[0].max(1),
                height: size[1].max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Decode image file bytes (PNG, JPEG, BMP) into RGBA rows, bottom row first.
///
/// Flipping makes texture coordinate `(0, 0)` address the bottom-left corner
/// of the image, which is what CSV objects are authored against.
pub fn decode_image(bytes: &[u8], label: &str) -> Result<image::RgbaImage> {
    let img = image::load_from_memory(bytes)
        .with_context(|| format!("Failed to decode texture {label}"))?;
    Ok(img.flipv().to_rgba8())
}

impl Texture {
    /// A 1x1 opaque white texture.
    ///
    /// Every object binds a texture, including the ones drawn with their vertex
    /// colours, so the pipeline layout stays the same for all of them.
    pub fn create_placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        Self::upload(device, queue, &img, Some("placeholder texture"))
    }

    /// Decode an object texture with [`decode_image`] and upload it.
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
    ) -> Result<Self> {
        let rgba = decode_image(bytes, label)?;
        Ok(Self::upload(device, queue, &rgba, Some(label)))
    }

    fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &image::RgbaImage,
        label: Option<&str>,
    ) -> Self {
        let dimensions = rgba.dimensions();

        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Repeat addressing with linear filtering, used for all object textures.
pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const RED: image::Rgba<u8> = image::Rgba([255, 0, 0, 255]);
    const BLUE: image::Rgba<u8> = image::Rgba([0, 0, 255, 255]);

    fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn decoded_rows_start_at_the_bottom_of_the_image() {
        // 2x2: red top row, blue bottom row, green bottom-right corner
        let mut img = image::RgbaImage::from_pixel(2, 2, RED);
        img.put_pixel(0, 1, BLUE);
        img.put_pixel(1, 1, image::Rgba([0, 255, 0, 255]));

        let decoded = decode_image(&png_bytes(&img), "test.png").unwrap();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(*decoded.get_pixel(0, 0), BLUE);
        assert_eq!(*decoded.get_pixel(1, 0), image::Rgba([0, 255, 0, 255]));
        assert_eq!(*decoded.get_pixel(0, 1), RED);
    }

    #[test]
    fn undecodable_bytes_name_the_texture() {
        let err = decode_image(b"not an image", "door.png").unwrap_err();
        assert!(format!("{err:#}").contains("door.png"));
    }
}
