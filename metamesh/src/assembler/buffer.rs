//! Finalized, immutable mesh buffers

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::math::Aabb;
use crate::procedural::MeshData;

/// Interleaved vertex for GPU upload: position, normal, UV (32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Owned contents of a [`MeshBuffer`], as returned by [`MeshBuffer::into_parts`]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshParts {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub uv1: Option<Vec<[f32; 2]>>,
    pub tangents: Option<Vec<[f32; 4]>>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
}

/// A validated mesh with every required attribute filled in
///
/// Only the assembler constructs these, so the invariants checked during
/// assembly (parallel attribute lengths, indices in range, triangle list)
/// hold for the buffer's whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    uv1: Option<Vec<[f32; 2]>>,
    tangents: Option<Vec<[f32; 4]>>,
    indices: Vec<u32>,
    bounds: Aabb,
}

impl MeshBuffer {
    /// Freeze assembled mesh data, computing its bounds
    pub(super) fn freeze(mesh: MeshData) -> Self {
        let bounds = Aabb::from_points(mesh.positions.iter().copied().map(Vec3::from))
            .unwrap_or_default();
        Self {
            positions: mesh.positions,
            normals: mesh.normals,
            uvs: mesh.uvs,
            uv1: mesh.uv1,
            tangents: mesh.tangents,
            indices: mesh.indices,
            bounds,
        }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    /// Secondary (lightmap) UVs, present when the lightmap pass ran
    pub fn uv1(&self) -> Option<&[[f32; 2]]> {
        self.uv1.as_deref()
    }

    /// Tangents with handedness in `w`, present when the tangent pass ran
    pub fn tangents(&self) -> Option<&[[f32; 4]]> {
        self.tangents.as_deref()
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Interleave position, normal and UV into one array
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((&position, &normal), &uv)| Vertex {
                position,
                normal,
                uv,
            })
            .collect()
    }

    /// Raw bytes of [`Self::vertices`]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    /// Raw bytes of the index buffer in native byte order
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Take ownership of the attribute arrays
    pub fn into_parts(self) -> MeshParts {
        MeshParts {
            positions: self.positions,
            normals: self.normals,
            uvs: self.uvs,
            uv1: self.uv1,
            tangents: self.tangents,
            indices: self.indices,
            bounds: self.bounds,
        }
    }
}
