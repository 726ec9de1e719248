//! Growable working buffers the generation stages operate on.

use glam::{Vec2, Vec3};

use crate::base::{BASE_TRIANGLES, base_positions};
use crate::error::MeshError;
use crate::index::IndexBuffer;
use crate::mesh::Mesh;
use crate::projection::project_to_sphere;
use crate::seam::SeamRepair;
use crate::subdivide::{subdivide_once, validate_order, vertex_count};
use crate::uv;

/// Per-vertex streams and triangles of an icosphere under construction.
///
/// Unlike [`Mesh`] every buffer can still grow; seam repair appends vertices.
/// [`SphereBuffers::freeze`] turns the result into an immutable mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereBuffers {
    pub positions: Vec<Vec3>,
    /// Empty until [`SphereBuffers::project`] runs.
    pub normals: Vec<Vec3>,
    /// `None` until [`SphereBuffers::map_uvs`] runs.
    pub uvs: Option<Vec<Vec2>>,
    pub triangles: Vec<[u32; 3]>,
}

impl SphereBuffers {
    /// Base icosahedron with position storage reserved for `order` subdivision
    /// passes.
    ///
    /// Fails with [`MeshError::InvalidOrder`] before allocating anything when
    /// `order` is above [`MAX_ORDER`](crate::MAX_ORDER).
    pub fn icosahedron(order: u32) -> Result<Self, MeshError> {
        validate_order(order)?;

        let mut positions = Vec::with_capacity(vertex_count(order));
        positions.extend_from_slice(&base_positions());

        Ok(Self {
            positions,
            normals: Vec::new(),
            uvs: None,
            triangles: BASE_TRIANGLES.to_vec(),
        })
    }

    /// Run one midpoint subdivision pass.
    pub fn subdivide(&mut self) {
        self.triangles = subdivide_once(&mut self.positions, &self.triangles);
    }

    /// Move every vertex onto the sphere of `radius` and derive the normals.
    pub fn project(&mut self, radius: f32) {
        self.normals = project_to_sphere(&mut self.positions, radius);
    }

    /// Compute equirectangular texture coordinates for every vertex.
    pub fn map_uvs(&mut self, radius: f32) {
        self.uvs = Some(uv::map_uvs(&self.positions, radius));
    }

    /// Repair seam-straddling triangles, returning the number of duplicated vertices.
    pub fn repair_seams(&mut self, seam: &SeamRepair) -> usize {
        seam.apply(self)
    }

    /// Flip `v` so that the texture origin is at the top.
    pub fn flip_v(&mut self) {
        if let Some(uvs) = self.uvs.as_mut() {
            uv::flip_v(uvs);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Freeze the buffers into a [`Mesh`], choosing the index width from the
    /// final vertex count.
    pub fn freeze(self) -> Mesh {
        let indices = IndexBuffer::from_triangles(&self.triangles, self.positions.len());
        Mesh::from_parts(
            self.positions.into_boxed_slice(),
            self.normals.into_boxed_slice(),
            self.uvs.map(Vec::into_boxed_slice),
            indices,
        )
    }
}
