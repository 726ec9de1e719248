//! One generation run: config in, mesh (and optional JSON file) out.

use orb_config::{Config, MeshConfig};
use orb_mesh::{IcosphereOptions, Mesh, SeamRepair};
use tracing::info;

use crate::error::GenError;
use crate::export::export_json;
use crate::stats::MeshStats;

/// Generator options for the mesh section of the config.
pub fn options_from_config(mesh: &MeshConfig) -> IcosphereOptions {
    IcosphereOptions::new(mesh.order, mesh.with_uv, mesh.radius)
        .with_seam(SeamRepair::new(mesh.seam_threshold))
}

/// Generate the configured icosphere, log its stats and export it if an
/// output path is set.
///
/// Unusable mesh settings are rejected before generation starts.
pub fn run(config: &Config) -> Result<(Mesh, MeshStats), GenError> {
    config.mesh.validate()?;
    let mesh = options_from_config(&config.mesh).generate()?;
    let stats = MeshStats::new(config.mesh.order, &mesh);
    stats.log();

    if let Some(path) = &config.export.path {
        export_json(&mesh, path, config.export.pretty)?;
        info!("Wrote mesh to {}", path.display());
    }

    Ok((mesh, stats))
}
