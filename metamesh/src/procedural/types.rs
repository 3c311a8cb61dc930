//! Procedural mesh types
//!
//! Shared types for procedural mesh generation.

use glam::{Vec2, Vec3};

/// Trait for mesh construction - enables generic geometry generation
///
/// Generators only ever push vertices and triangles, so any sink that can
/// accept those (the raw `MeshData` buffer, a counting sink, a GPU staging
/// buffer) can be filled directly.
pub trait MeshBuilder: Default {
    /// Add a vertex with position, UV coordinates, and normal, returning its index
    fn add_vertex(&mut self, position: Vec3, uv: Vec2, normal: Vec3) -> u32;

    /// Add a triangle using three vertex indices (counter-clockwise from the front)
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    /// Index the next added vertex will receive
    fn next_index(&self) -> u32;

    /// Hint the final vertex and index counts
    fn reserve(&mut self, _vertices: usize, _indices: usize) {}
}

/// Raw, mutable mesh data produced by a generator
///
/// Attributes are parallel arrays indexed by vertex. `normals` and `uvs` may
/// be left empty by a producer; the assembler fills them before the mesh is
/// finalized. `uv1` and `tangents` are only populated by the assembler's
/// optional passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// Primary UV coordinates as [u, v]
    pub uvs: Vec<[f32; 2]>,
    /// Secondary (lightmap) UV coordinates
    pub uv1: Option<Vec<[f32; 2]>>,
    /// Tangents as [x, y, z, handedness]
    pub tangents: Option<Vec<[f32; 4]>>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create empty mesh data
    pub fn new() -> Self {
        Self::default()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Position of a vertex as a glam vector
    #[inline]
    pub fn position(&self, index: u32) -> Vec3 {
        Vec3::from(self.positions[index as usize])
    }
}

impl MeshBuilder for MeshData {
    fn add_vertex(&mut self, position: Vec3, uv: Vec2, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.uvs.push(uv.to_array());
        index
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    fn next_index(&self) -> u32 {
        self.positions.len() as u32
    }

    fn reserve(&mut self, vertices: usize, indices: usize) {
        self.positions.reserve(vertices);
        self.normals.reserve(vertices);
        self.uvs.reserve(vertices);
        self.indices.reserve(indices);
    }
}
