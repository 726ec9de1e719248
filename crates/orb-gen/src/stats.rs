//! Summary numbers for a generated mesh.

use orb_mesh::{IndexWidth, Mesh, vertex_count};

/// Sizes of one generated icosphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshStats {
    pub order: u32,
    pub vertices: usize,
    pub triangles: usize,
    /// Vertices added by seam repair on top of the subdivided sphere.
    pub duplicated: usize,
    pub index_width: IndexWidth,
    /// Bytes of all vertex attribute streams.
    pub vertex_bytes: usize,
    pub index_bytes: usize,
}

impl MeshStats {
    pub fn new(order: u32, mesh: &Mesh) -> Self {
        let floats_per_vertex = if mesh.has_uvs() { 8 } else { 6 };
        let index_width = mesh.indices().width();

        Self {
            order,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            duplicated: mesh.vertex_count().saturating_sub(vertex_count(order)),
            index_width,
            vertex_bytes: mesh.vertex_count() * floats_per_vertex * size_of::<f32>(),
            index_bytes: mesh.indices().len() * index_width.bytes(),
        }
    }

    pub fn log(&self) {
        tracing::info!(
            order = self.order,
            vertices = self.vertices,
            triangles = self.triangles,
            duplicated = self.duplicated,
            index_width = ?self.index_width,
            vertex_bytes = self.vertex_bytes,
            index_bytes = self.index_bytes,
            "Generated icosphere"
        );
    }
}
