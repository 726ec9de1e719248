//! GPU boundary for generated icospheres.
//!
//! Vertex buffer layouts for the parallel position / normal / UV streams, an
//! interleaved vertex alternative, and upload of a finished [`orb_mesh::Mesh`]
//! into `wgpu` buffers.

pub mod buffer;
pub mod vertex_format;

pub use buffer::{GpuSphereMesh, index_format};
pub use vertex_format::{
    NORMAL_STREAM_LAYOUT, POSITION_STREAM_LAYOUT, SPHERE_STREAM_LAYOUTS, SphereVertex,
    UV_STREAM_LAYOUT, interleave, sphere_stream_layouts,
};
