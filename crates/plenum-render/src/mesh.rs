//! CPU-side vertex packing for uploaded meshes.

use plenum_core::{Geometry, Material, Topology};

/// Interleaved vertex as laid out in the scene shader (`@location(0..2)`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl GpuVertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Bake the material colour into each vertex. Wire materials drop normals so
/// the shader leaves them unlit.
pub fn bake_vertices(geometry: &Geometry, material: &Material) -> Vec<GpuVertex> {
    let lit = geometry.topology == Topology::Triangles;
    geometry
        .vertices
        .iter()
        .map(|v| GpuVertex {
            pos: v.position,
            normal: if lit { v.normal } else { [0.0; 3] },
            color: material.color,
        })
        .collect()
}

#[inline]
pub fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
        Topology::Lines => wgpu::PrimitiveTopology::LineList,
    }
}
