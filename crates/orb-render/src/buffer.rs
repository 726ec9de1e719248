//! Upload of a finished icosphere into GPU vertex and index buffers.

use orb_mesh::{IndexWidth, Mesh};
use wgpu::util::DeviceExt;

/// An icosphere resident on the GPU: one vertex buffer per attribute stream
/// plus the triangle index buffer.
pub struct GpuSphereMesh {
    pub positions: wgpu::Buffer,
    pub normals: wgpu::Buffer,
    /// Present when the source mesh had texture coordinates.
    pub uvs: Option<wgpu::Buffer>,
    pub indices: wgpu::Buffer,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
}

/// The wgpu index format for an index width.
pub fn index_format(width: IndexWidth) -> wgpu::IndexFormat {
    match width {
        IndexWidth::U16 => wgpu::IndexFormat::Uint16,
        IndexWidth::U32 => wgpu::IndexFormat::Uint32,
    }
}

impl GpuSphereMesh {
    /// Create the vertex and index buffers for `mesh`.
    ///
    /// Buffers are labelled `{label}-positions`, `{label}-normals`,
    /// `{label}-uvs` and `{label}-indices`.
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let positions = create_vertex_buffer(
            device,
            &format!("{label}-positions"),
            bytemuck::cast_slice(mesh.position_data()),
        );
        let normals = create_vertex_buffer(
            device,
            &format!("{label}-normals"),
            bytemuck::cast_slice(mesh.normal_data()),
        );
        let uvs = mesh.uv_data().map(|data| {
            create_vertex_buffer(device, &format!("{label}-uvs"), bytemuck::cast_slice(data))
        });

        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: mesh.indices().as_bytes(),
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_format = index_format(mesh.indices().width());
        log::debug!(
            "Uploaded sphere mesh '{}': {} vertices, {} indices ({:?})",
            label,
            mesh.vertex_count(),
            mesh.indices().len(),
            index_format
        );

        Self {
            positions,
            normals,
            uvs,
            indices,
            index_count: mesh.indices().len() as u32,
            index_format,
        }
    }

    /// Bind the attribute streams to slots 0, 1 (and 2 for UVs) and the index
    /// buffer to a render pass.
    pub fn bind<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.positions.slice(..));
        render_pass.set_vertex_buffer(1, self.normals.slice(..));
        if let Some(uvs) = &self.uvs {
            render_pass.set_vertex_buffer(2, uvs.slice(..));
        }
        render_pass.set_index_buffer(self.indices.slice(..), self.index_format);
    }

    /// Draw the entire mesh using indexed rendering.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }

    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }
}

fn create_vertex_buffer(device: &wgpu::Device, label: &str, data: &[u8]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: data,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_mesh::generate_icosphere;

    fn create_test_device() -> Option<(wgpu::Device, wgpu::Queue)> {
        pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });

            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    compatible_surface: None,
                    force_fallback_adapter: false,
                })
                .await
                .ok()?;

            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()
        })
    }

    #[test]
    fn test_index_format_selection() {
        assert_eq!(index_format(IndexWidth::U16), wgpu::IndexFormat::Uint16);
        assert_eq!(index_format(IndexWidth::U32), wgpu::IndexFormat::Uint32);
    }

    #[test]
    fn test_upload_with_uvs() {
        let Some((device, _queue)) = create_test_device() else {
            return;
        };
        let mesh = generate_icosphere(3, true, 1.0).unwrap();
        let gpu = GpuSphereMesh::upload(&device, "sphere", &mesh);

        let vertices = mesh.vertex_count() as u64;
        assert_eq!(gpu.positions.size(), 12 * vertices);
        assert_eq!(gpu.normals.size(), 12 * vertices);
        assert_eq!(gpu.uvs.as_ref().map(wgpu::Buffer::size), Some(8 * vertices));
        assert_eq!(gpu.index_count, 3 * 1280);
        assert_eq!(gpu.index_format, wgpu::IndexFormat::Uint16);
        assert_eq!(gpu.indices.size(), 2 * 3 * 1280);
    }

    #[test]
    fn test_upload_without_uvs() {
        let Some((device, _queue)) = create_test_device() else {
            return;
        };
        let mesh = generate_icosphere(1, false, 1.0).unwrap();
        let gpu = GpuSphereMesh::upload(&device, "plain", &mesh);

        assert!(!gpu.has_uvs());
        assert_eq!(gpu.index_count, 240);
    }

    #[test]
    fn test_upload_large_mesh_uses_u32_indices() {
        let Some((device, _queue)) = create_test_device() else {
            return;
        };
        let mesh = generate_icosphere(7, false, 1.0).unwrap();
        let gpu = GpuSphereMesh::upload(&device, "large", &mesh);

        assert_eq!(gpu.index_format, wgpu::IndexFormat::Uint32);
        assert_eq!(gpu.indices.size(), 4 * mesh.indices().len() as u64);
    }
}
