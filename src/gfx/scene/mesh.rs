//! Shared primitive meshes
//!
//! A [`Mesh`] is immutable once built and shared between bodies through an
//! `Rc`. Its GPU buffers are created on first upload and reused afterwards.

use std::cell::OnceCell;

use wgpu::util::DeviceExt;

use super::vertex::Vertex3D;
use crate::gfx::geometry::{Dimension, GeometryData};

/// Vertex and index buffers of an uploaded mesh
#[derive(Debug)]
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

#[derive(Debug)]
pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    dimensions: Dimension,
    buffers: OnceCell<MeshBuffers>,
}

impl Mesh {
    /// Interleaves generated geometry into GPU vertices
    pub fn from_geometry(data: &GeometryData) -> Self {
        let vertices = data
            .vertices
            .iter()
            .zip(&data.normals)
            .zip(&data.colors)
            .map(|((position, normal), color)| Vertex3D {
                position: (*position).into(),
                normal: (*normal).into(),
                color: color.to_array(),
            })
            .collect();

        Self {
            vertices,
            indices: data.flat_indices(),
            dimensions: data.dimensions,
            buffers: OnceCell::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Extents the mesh was authored with
    pub fn dimensions(&self) -> Dimension {
        self.dimensions
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// GPU buffers, if [`upload`](Self::upload) has run
    pub fn buffers(&self) -> Option<&MeshBuffers> {
        self.buffers.get()
    }

    /// Creates the vertex and index buffers once
    pub fn upload(&self, device: &wgpu::Device) -> &MeshBuffers {
        self.buffers.get_or_init(|| MeshBuffers {
            vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&self.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&self.indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: self.index_count(),
        })
    }
}

/// Draws uploaded meshes into a render pass
pub trait DrawMesh {
    fn draw_mesh(&mut self, mesh: &Mesh);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &Mesh) {
        // Skip drawing if not uploaded
        let Some(buffers) = mesh.buffers() else {
            return;
        };

        self.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
        self.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..buffers.index_count, 0, 0..1);
    }
}
