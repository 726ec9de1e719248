//! JSON export of a generated mesh as flat attribute arrays.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orb_mesh::Mesh;
use serde::Serialize;

use crate::error::ExportError;

/// Flat layout consumed by GPU upload code: `position` and `normal` are
/// `3n` floats, `texCoord` is `2n` floats, `index` is `3m` vertex indices.
#[derive(Debug, Serialize)]
pub struct MeshDocument<'a> {
    pub position: &'a [f32],
    pub normal: &'a [f32],
    #[serde(rename = "texCoord", skip_serializing_if = "Option::is_none")]
    pub tex_coord: Option<&'a [f32]>,
    pub index: Vec<u32>,
}

impl<'a> MeshDocument<'a> {
    pub fn new(mesh: &'a Mesh) -> Self {
        Self {
            position: mesh.position_data(),
            normal: mesh.normal_data(),
            tex_coord: mesh.uv_data(),
            index: mesh.indices().iter().collect(),
        }
    }
}

/// Write `mesh` as JSON to `writer`.
pub fn write_json<W: Write>(mesh: &Mesh, writer: W, pretty: bool) -> Result<(), ExportError> {
    let document = MeshDocument::new(mesh);
    if pretty {
        serde_json::to_writer_pretty(writer, &document)?;
    } else {
        serde_json::to_writer(writer, &document)?;
    }
    Ok(())
}

/// Write `mesh` as JSON to the file at `path`, creating parent directories.
pub fn export_json(mesh: &Mesh, path: &Path, pretty: bool) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_json(mesh, &mut writer, pretty)?;
    writer.flush()?;
    Ok(())
}
