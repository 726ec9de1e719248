//! `wgpu::VertexBufferLayout`s for icosphere rendering.
//!
//! The mesh is uploaded as parallel streams, one vertex buffer per attribute:
//!
//! | Slot | Location | Format    | Stream   |
//! |------|----------|-----------|----------|
//! | 0    | 0        | Float32x3 | position |
//! | 1    | 1        | Float32x3 | normal   |
//! | 2    | 2        | Float32x2 | uv       |
//!
//! [`SphereVertex`] packs the same attributes into one interleaved stream for
//! pipelines that prefer a single vertex buffer.

use std::mem;

use bytemuck::{Pod, Zeroable};
use orb_mesh::Mesh;
use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

const POSITION_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

const NORMAL_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 1,
}];

const UV_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x2,
    offset: 0,
    shader_location: 2,
}];

/// Position stream: tightly packed `[f32; 3]`, shader location 0.
pub const POSITION_STREAM_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<[f32; 3]>() as BufferAddress,
    step_mode: VertexStepMode::Vertex,
    attributes: &POSITION_ATTRIBUTES,
};

/// Normal stream: tightly packed `[f32; 3]`, shader location 1.
pub const NORMAL_STREAM_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<[f32; 3]>() as BufferAddress,
    step_mode: VertexStepMode::Vertex,
    attributes: &NORMAL_ATTRIBUTES,
};

/// Texture coordinate stream: tightly packed `[f32; 2]`, shader location 2.
pub const UV_STREAM_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<[f32; 2]>() as BufferAddress,
    step_mode: VertexStepMode::Vertex,
    attributes: &UV_ATTRIBUTES,
};

/// All three stream layouts in vertex buffer slot order.
pub static SPHERE_STREAM_LAYOUTS: [VertexBufferLayout<'static>; 3] =
    [POSITION_STREAM_LAYOUT, NORMAL_STREAM_LAYOUT, UV_STREAM_LAYOUT];

/// Stream layouts for a pipeline drawing an icosphere with or without UVs.
///
/// Pass the result as `VertexState::buffers`; slot `i` matches the buffer bound
/// by [`GpuSphereMesh::bind`](crate::GpuSphereMesh::bind) at the same slot.
pub fn sphere_stream_layouts(with_uv: bool) -> &'static [VertexBufferLayout<'static>] {
    if with_uv {
        &SPHERE_STREAM_LAYOUTS
    } else {
        &SPHERE_STREAM_LAYOUTS[..2]
    }
}

/// Interleaved position, normal and UV.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 32]);

const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(SphereVertex, normal) as BufferAddress,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: mem::offset_of!(SphereVertex, uv) as BufferAddress,
        shader_location: 2,
    },
];

impl SphereVertex {
    /// Get the vertex buffer layout for this vertex type.
    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: mem::size_of::<SphereVertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &SPHERE_VERTEX_ATTRIBUTES,
        }
    }
}

/// Interleave the mesh streams into one vertex per mesh vertex.
///
/// Meshes generated without texture coordinates get `uv = [0.0, 0.0]`.
pub fn interleave(mesh: &Mesh) -> Vec<SphereVertex> {
    let uvs = mesh.uvs();
    mesh.positions()
        .iter()
        .zip(mesh.normals())
        .enumerate()
        .map(|(i, (position, normal))| SphereVertex {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uvs.map_or([0.0; 2], |uvs| uvs[i].to_array()),
        })
        .collect()
}

const _: () = assert!(
    SPHERE_VERTEX_ATTRIBUTES[2].offset + 8 == mem::size_of::<SphereVertex>() as u64,
    "uv must be the last field of SphereVertex"
);

#[cfg(test)]
mod tests {
    use super::*;
    use orb_mesh::generate_icosphere;

    #[test]
    fn test_stream_strides_match_attribute_sizes() {
        for layout in &SPHERE_STREAM_LAYOUTS {
            assert_eq!(layout.attributes.len(), 1);
            assert_eq!(layout.attributes[0].offset, 0);
            assert_eq!(layout.array_stride, layout.attributes[0].format.size());
        }
    }

    #[test]
    fn test_stream_locations_follow_slots() {
        for (slot, layout) in SPHERE_STREAM_LAYOUTS.iter().enumerate() {
            assert_eq!(layout.attributes[0].shader_location, slot as u32);
        }
    }

    #[test]
    fn test_stream_selection() {
        assert_eq!(sphere_stream_layouts(true).len(), 3);

        let without_uv = sphere_stream_layouts(false);
        assert_eq!(without_uv.len(), 2);
        assert_eq!(without_uv[1].attributes, NORMAL_STREAM_LAYOUT.attributes);
    }

    #[test]
    fn test_sphere_vertex_layout() {
        let layout = SphereVertex::layout();
        // position (f32×3) + normal (f32×3) + uv (f32×2) = 32 bytes stride
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn test_interleave_copies_streams() {
        let mesh = generate_icosphere(2, true, 2.0).unwrap();
        let vertices = interleave(&mesh);
        let uvs = mesh.uvs().unwrap();

        assert_eq!(vertices.len(), mesh.vertex_count());
        for (i, vertex) in vertices.iter().enumerate() {
            assert_eq!(vertex.position, mesh.positions()[i].to_array());
            assert_eq!(vertex.normal, mesh.normals()[i].to_array());
            assert_eq!(vertex.uv, uvs[i].to_array());
        }
        assert_eq!(
            bytemuck::cast_slice::<SphereVertex, u8>(&vertices).len(),
            32 * mesh.vertex_count()
        );
    }

    #[test]
    fn test_interleave_without_uvs_zeroes_uv() {
        let mesh = generate_icosphere(1, false, 1.0).unwrap();
        assert!(interleave(&mesh).iter().all(|v| v.uv == [0.0, 0.0]));
    }

    #[test]
    fn test_stream_layouts_are_valid_for_wgpu_pipeline() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            force_fallback_adapter: true,
            ..Default::default()
        }));

        let Ok(adapter) = adapter else {
            // No adapter available (headless CI without GPU), skip.
            return;
        };

        let (device, _queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
                .expect("failed to create device");

        let shader_source = r#"
            struct VertexOutput {
                @builtin(position) clip: vec4<f32>,
                @location(0) shade: f32,
                @location(1) uv: vec2<f32>,
            };

            @vertex
            fn vs_main(
                @location(0) position: vec3<f32>,
                @location(1) normal: vec3<f32>,
                @location(2) uv: vec2<f32>,
            ) -> VertexOutput {
                var out: VertexOutput;
                out.clip = vec4<f32>(position, 1.0);
                out.shade = max(dot(normal, vec3<f32>(0.0, 1.0, 0.0)), 0.0);
                out.uv = uv;
                return out;
            }

            @fragment
            fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
                return vec4<f32>(in.uv, in.shade, 1.0);
            }
        "#;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("test_sphere_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let _pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("test_sphere_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: sphere_stream_layouts(true),
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Bgra8UnormSrgb,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview_mask: None,
            cache: None,
        });
    }
}
