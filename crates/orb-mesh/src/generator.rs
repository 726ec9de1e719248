//! Icosphere generation: base icosahedron, subdivision, projection, UVs.

use tracing::{debug, info, instrument};

use crate::buffers::SphereBuffers;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::seam::SeamRepair;

/// Parameters of one icosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcosphereOptions {
    /// Number of subdivision passes, `0..=MAX_ORDER`.
    pub order: u32,
    /// Emit seam-repaired equirectangular texture coordinates.
    pub with_uv: bool,
    /// Sphere radius; must be positive.
    pub radius: f32,
    /// Seam detection settings, only used when `with_uv` is set.
    pub seam: SeamRepair,
}

impl Default for IcosphereOptions {
    fn default() -> Self {
        Self {
            order: 0,
            with_uv: false,
            radius: 1.0,
            seam: SeamRepair::default(),
        }
    }
}

impl IcosphereOptions {
    pub fn new(order: u32, with_uv: bool, radius: f32) -> Self {
        Self {
            order,
            with_uv,
            radius,
            seam: SeamRepair::default(),
        }
    }

    /// Replace the seam repair settings.
    pub fn with_seam(mut self, seam: SeamRepair) -> Self {
        self.seam = seam;
        self
    }

    /// Generate the mesh.
    ///
    /// The result depends only on these options; separate calls share no state
    /// and may run concurrently.
    #[instrument(skip_all, fields(order = self.order, with_uv = self.with_uv))]
    pub fn generate(&self) -> Result<Mesh, MeshError> {
        debug_assert!(self.radius > 0.0, "radius must be positive");

        let mut buffers = SphereBuffers::icosahedron(self.order)?;

        for pass in 1..=self.order {
            buffers.subdivide();
            debug!(
                "subdivision pass {}: {} vertices, {} triangles",
                pass,
                buffers.vertex_count(),
                buffers.triangles.len()
            );
        }

        buffers.project(self.radius);

        if self.with_uv {
            buffers.map_uvs(self.radius);
            let duplicated = buffers.repair_seams(&self.seam);
            buffers.flip_v();
            debug!(
                "seam repair duplicated {} vertices (threshold {})",
                duplicated,
                self.seam.threshold()
            );
        }

        let mesh = buffers.freeze();
        info!(
            "icosphere ready: {} vertices, {} triangles, {:?} indices",
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.indices().width()
        );
        Ok(mesh)
    }
}

/// Generate an icosphere with `order` subdivision passes on a sphere of `radius`.
///
/// Fails with [`MeshError::InvalidOrder`] when `order` exceeds
/// [`MAX_ORDER`](crate::MAX_ORDER). Seam repair uses the default threshold.
pub fn generate_icosphere(order: u32, with_uv: bool, radius: f32) -> Result<Mesh, MeshError> {
    IcosphereOptions::new(order, with_uv, radius).generate()
}
