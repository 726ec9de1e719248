//! The finished, immutable icosphere mesh.

use glam::{Vec2, Vec3};

use crate::index::IndexBuffer;

/// An icosphere ready for upload: parallel per-vertex streams plus a
/// triangle-list index buffer.
///
/// Positions, normals and (optional) texture coordinates share one vertex
/// index space. Triangles wind counter-clockwise seen from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Box<[Vec3]>,
    normals: Box<[Vec3]>,
    uvs: Option<Box<[Vec2]>>,
    indices: IndexBuffer,
}

impl Mesh {
    pub(crate) fn from_parts(
        positions: Box<[Vec3]>,
        normals: Box<[Vec3]>,
        uvs: Option<Box<[Vec2]>>,
        indices: IndexBuffer,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert!(uvs.as_ref().is_none_or(|uvs| uvs.len() == positions.len()));
        debug_assert_eq!(indices.len() % 3, 0);

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    /// Vertex positions on the sphere.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Unit normals, `position / radius`.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates, if the mesh was generated with them.
    pub fn uvs(&self) -> Option<&[Vec2]> {
        self.uvs.as_deref()
    }

    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice.
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat `[x0, y0, z0, x1, ...]` slice.
    pub fn normal_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Texture coordinates as a flat `[u0, v0, u1, ...]` slice.
    pub fn uv_data(&self) -> Option<&[f32]> {
        self.uvs.as_deref().map(bytemuck::cast_slice)
    }

    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Corner indices of triangle `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= self.triangle_count()`.
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let corner = |k: usize| {
            self.indices
                .get(3 * t + k)
                .unwrap_or_else(|| panic!("triangle {t} out of range"))
        };
        [corner(0), corner(1), corner(2)]
    }

    /// Iterate over all triangles as corner index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.triangle_count()).map(|t| self.triangle(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::from_parts(
            vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_X].into(),
            vec![Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_X].into(),
            Some(vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE].into()),
            IndexBuffer::from_triangles(&[[0, 1, 2], [2, 1, 3]], 4),
        )
    }

    #[test]
    fn test_flat_views_have_expected_lengths() {
        let mesh = quad();
        assert_eq!(mesh.position_data().len(), 12);
        assert_eq!(mesh.normal_data().len(), 12);
        assert_eq!(mesh.uv_data().map(<[f32]>::len), Some(8));
        assert_eq!(&mesh.position_data()[..3], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_triangle_access() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(1), [2, 1, 3]);
        assert_eq!(
            mesh.triangles().collect::<Vec<_>>(),
            vec![[0, 1, 2], [2, 1, 3]]
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_triangle_out_of_range_panics() {
        quad().triangle(2);
    }

    #[test]
    fn test_mesh_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mesh>();
    }

    #[test]
    fn test_mesh_without_uvs() {
        let mesh = Mesh::from_parts(
            vec![Vec3::X; 3].into(),
            vec![Vec3::X; 3].into(),
            None,
            IndexBuffer::from_triangles(&[[0, 1, 2]], 3),
        );
        assert!(!mesh.has_uvs());
        assert!(mesh.uvs().is_none());
        assert!(mesh.uv_data().is_none());
    }
}
