//! Per-triangle lightmap atlas
//!
//! The simplest packer that always yields non-overlapping secondary UVs:
//! every triangle is split off into its own vertices, flattened into its
//! plane and placed in a dedicated cell of a square grid. All triangles share
//! one scale, so texel density is uniform across the mesh.

use glam::{Vec2, Vec3};
use metamesh::{MeshData, MeshError, SecondaryUvGenerator};
use tracing::debug;

/// Lightmap UV generator that gives every triangle its own atlas cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleAtlas {
    /// Gap kept free on each side of a cell, as a fraction of the cell size
    pub padding: f32,
}

impl Default for TriangleAtlas {
    fn default() -> Self {
        Self { padding: 0.1 }
    }
}

/// Triangle corners in a 2D frame of the triangle's own plane
fn flatten(p0: Vec3, p1: Vec3, p2: Vec3) -> [Vec2; 3] {
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let Some(x) = e1.try_normalize() else {
        return [Vec2::ZERO; 3];
    };
    let y = e1
        .cross(e2)
        .cross(e1)
        .try_normalize()
        .unwrap_or_else(|| x.any_orthonormal_vector());
    [
        Vec2::ZERO,
        Vec2::new(e1.length(), 0.0),
        Vec2::new(e2.dot(x), e2.dot(y)),
    ]
}

/// Split `mesh` so that every triangle owns its three vertices
fn deindex(mesh: &mut MeshData) {
    let corners = std::mem::take(&mut mesh.indices);
    let pick = |src: &[[f32; 3]]| corners.iter().map(|&i| src[i as usize]).collect::<Vec<_>>();

    mesh.positions = pick(&mesh.positions);
    mesh.normals = pick(&mesh.normals);
    mesh.uvs = corners.iter().map(|&i| mesh.uvs[i as usize]).collect();
    mesh.tangents = mesh
        .tangents
        .take()
        .map(|tangents| corners.iter().map(|&i| tangents[i as usize]).collect());
    mesh.indices = (0..corners.len() as u32).collect();
}

impl SecondaryUvGenerator for TriangleAtlas {
    fn generate(&self, mesh: &mut MeshData) -> Result<(), MeshError> {
        if !(0.0..0.5).contains(&self.padding) {
            return Err(MeshError::SecondaryUv(format!(
                "padding must be in [0, 0.5), got {}",
                self.padding
            )));
        }
        let triangle_count = mesh.triangle_count();
        if triangle_count == 0 {
            return Err(MeshError::SecondaryUv("mesh has no triangles".into()));
        }

        deindex(mesh);

        let flat: Vec<[Vec2; 3]> = mesh
            .triangles()
            .map(|[a, b, c]| flatten(mesh.position(a), mesh.position(b), mesh.position(c)))
            .collect();

        // Shift every triangle to its bounding-box origin and find the largest extent
        let mut largest = 0.0_f32;
        let flat: Vec<[Vec2; 3]> = flat
            .into_iter()
            .map(|corners| {
                let min = corners[0].min(corners[1]).min(corners[2]);
                let shifted = corners.map(|c| c - min);
                largest = shifted.iter().fold(largest, |m, c| m.max(c.max_element()));
                shifted
            })
            .collect();

        let grid = (triangle_count as f64).sqrt().ceil() as usize;
        let cell = 1.0 / grid as f32;
        let pad = cell * self.padding;
        let scale = if largest > 0.0 {
            (cell - 2.0 * pad) / largest
        } else {
            0.0
        };

        let mut uv1 = Vec::with_capacity(triangle_count * 3);
        for (n, corners) in flat.iter().enumerate() {
            let origin = Vec2::new((n % grid) as f32, (n / grid) as f32) * cell + Vec2::splat(pad);
            uv1.extend(corners.iter().map(|c| (origin + *c * scale).to_array()));
        }
        mesh.uv1 = Some(uv1);

        debug!("atlas: {triangle_count} triangles in a {grid}x{grid} grid");
        Ok(())
    }
}
