//! Icosphere generation: a sphere mesh built by recursively subdividing an
//! icosahedron, with optional seam-correct equirectangular texture coordinates.
//!
//! ```
//! use orb_mesh::generate_icosphere;
//!
//! let mesh = generate_icosphere(3, true, 1.0).unwrap();
//! assert_eq!(mesh.triangle_count(), 1280);
//! assert!(mesh.uvs().is_some());
//! ```

pub mod base;
pub mod buffers;
pub mod error;
pub mod generator;
pub mod index;
pub mod mesh;
pub mod projection;
pub mod seam;
pub mod subdivide;
pub mod uv;


pub use base::{BASE_TRIANGLES, base_positions};
pub use buffers::SphereBuffers;
pub use error::MeshError;
pub use generator::{IcosphereOptions, generate_icosphere};
pub use index::{IndexBuffer, IndexWidth, Indices};
pub use mesh::Mesh;
pub use seam::{
    DEFAULT_SEAM_THRESHOLD, MAX_SEAM_THRESHOLD, NARROW_SEAM_THRESHOLD, SeamRepair, texture_winding,
};
pub use subdivide::{MAX_ORDER, triangle_count, vertex_count};
