//! Render-ready vertex data handed to a [`crate::scene::RenderSurface`].

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    /// Zero for line geometry, which is drawn unlit.
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl Geometry {
    /// Axis-aligned solid box: 24 vertices (4 per face for flat normals), 12 triangles.
    pub fn cuboid(center: Vec3, size: Vec3) -> Self {
        let h = size * 0.5;
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        let mut add_face = |corners: [[f32; 3]; 4], normal: [f32; 3]| {
            let base = vertices.len() as u32;
            for c in corners {
                let p = center + Vec3::from(c);
                vertices.push(Vertex {
                    position: p.to_array(),
                    normal,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        };

        let (x, y, z) = (h.x, h.y, h.z);
        // +X
        add_face(
            [[x, -y, z], [x, -y, -z], [x, y, -z], [x, y, z]],
            [1.0, 0.0, 0.0],
        );
        // -X
        add_face(
            [[-x, -y, -z], [-x, -y, z], [-x, y, z], [-x, y, -z]],
            [-1.0, 0.0, 0.0],
        );
        // +Y
        add_face(
            [[-x, y, z], [x, y, z], [x, y, -z], [-x, y, -z]],
            [0.0, 1.0, 0.0],
        );
        // -Y
        add_face(
            [[-x, -y, -z], [x, -y, -z], [x, -y, z], [-x, -y, z]],
            [0.0, -1.0, 0.0],
        );
        // +Z
        add_face(
            [[-x, -y, z], [x, -y, z], [x, y, z], [-x, y, z]],
            [0.0, 0.0, 1.0],
        );
        // -Z
        add_face(
            [[x, -y, -z], [-x, -y, -z], [-x, y, -z], [x, y, -z]],
            [0.0, 0.0, -1.0],
        );

        Self {
            vertices,
            indices,
            topology: Topology::Triangles,
        }
    }

    /// The 12 edges of an axis-aligned box as a line list.
    pub fn wire_box(center: Vec3, extents: Vec3) -> Self {
        let corners = box_corners(center, extents);
        let vertices = corners
            .iter()
            .map(|c| Vertex {
                position: c.to_array(),
                normal: [0.0; 3],
            })
            .collect();
        let indices = BOX_EDGES.iter().flat_map(|&[a, b]| [a, b]).collect();
        Self {
            vertices,
            indices,
            topology: Topology::Lines,
        }
    }
}

/// Corner `i` has bit 0 → +X, bit 1 → +Y, bit 2 → +Z.
pub fn box_corners(center: Vec3, extents: Vec3) -> [Vec3; 8] {
    let h = extents * 0.5;
    std::array::from_fn(|i| {
        let sx = if i & 1 != 0 { 1.0 } else { -1.0 };
        let sy = if i & 2 != 0 { 1.0 } else { -1.0 };
        let sz = if i & 4 != 0 { 1.0 } else { -1.0 };
        center + Vec3::new(sx * h.x, sy * h.y, sz * h.z)
    })
}

pub const BOX_EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    Surface,
    Wire,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 4],
    pub kind: MaterialKind,
}

impl Material {
    pub fn surface(color: [f32; 4]) -> Self {
        Self {
            color,
            kind: MaterialKind::Surface,
        }
    }

    pub fn wire(color: [f32; 4]) -> Self {
        Self {
            color,
            kind: MaterialKind::Wire,
        }
    }
}
