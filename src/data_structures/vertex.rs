//! Vertex layout shared by every CSV object.
//!
//! A vertex is 11 consecutive floats: position (3), colour (3), normal (3) and
//! texture coordinates (2). The same order is used on the GPU, so the float
//! buffer read from a CSV file is reinterpreted without reordering.

/// Describes how a vertex type is laid out in a GPU vertex buffer.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// Number of floats that make up one vertex in a CSV file.
pub const FLOATS_PER_VERTEX: usize = 11;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CsvVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl CsvVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x2
    ];

    fn from_chunk(chunk: &[f32]) -> Self {
        Self {
            position: [chunk[0], chunk[1], chunk[2]],
            color: [chunk[3], chunk[4], chunk[5]],
            normal: [chunk[6], chunk[7], chunk[8]],
            tex_coords: [chunk[9], chunk[10]],
        }
    }
}

/**
 * stride: 11 floats, attributes at 0, 12, 24 and 36 bytes.
 *
 * Shader locations follow the attribute order in the file:
 * 0 position, 1 colour, 2 normal, 3 texture coordinates.
 */
impl Vertex for CsvVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CsvVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Group a flat float buffer into vertices.
///
/// The vertex count is `floats.len() / FLOATS_PER_VERTEX`; leftover floats that
/// don't fill a whole vertex are dropped.
pub fn vertices_from_floats(floats: &[f32]) -> Vec<CsvVertex> {
    let chunks = floats.chunks_exact(FLOATS_PER_VERTEX);
    let leftover = chunks.remainder().len();
    if leftover > 0 {
        log::warn!(
            "{} trailing floats don't form a whole vertex ({} floats each) and are dropped.",
            leftover,
            FLOATS_PER_VERTEX
        );
    }
    chunks.map(CsvVertex::from_chunk).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_eleven_tightly_packed_floats() {
        assert_eq!(
            std::mem::size_of::<CsvVertex>(),
            FLOATS_PER_VERTEX * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn layout_offsets_follow_attribute_order() {
        let layout = CsvVertex::desc();
        assert_eq!(layout.array_stride, 44);
        let offsets: Vec<_> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24, 36]);
        let locations: Vec<_> = layout
            .attributes
            .iter()
            .map(|a| a.shader_location)
            .collect();
        assert_eq!(locations, vec![0, 1, 2, 3]);
        assert_eq!(layout.attributes[3].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn groups_floats_into_attributes() {
        let floats: Vec<f32> = (0..22).map(|i| i as f32).collect();
        let vertices = vertices_from_floats(&floats);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [0.0, 1.0, 2.0]);
        assert_eq!(vertices[0].color, [3.0, 4.0, 5.0]);
        assert_eq!(vertices[0].normal, [6.0, 7.0, 8.0]);
        assert_eq!(vertices[0].tex_coords, [9.0, 10.0]);
        assert_eq!(vertices[1].position, [11.0, 12.0, 13.0]);
        assert_eq!(vertices[1].tex_coords, [20.0, 21.0]);
    }

    #[test]
    fn gpu_bytes_match_the_flat_buffer() {
        let floats: Vec<f32> = (0..11).map(|i| i as f32 * 0.5).collect();
        let vertices = vertices_from_floats(&floats);
        let as_floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(as_floats, floats.as_slice());
    }

    #[test]
    fn incomplete_trailing_vertex_is_dropped() {
        let floats = vec![1.0; FLOATS_PER_VERTEX * 3 + 5];
        assert_eq!(vertices_from_floats(&floats).len(), 3);
        assert!(vertices_from_floats(&[1.0; 10]).is_empty());
    }
}
