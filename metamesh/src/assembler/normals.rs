//! Area-weighted vertex normal recomputation

use glam::Vec3;

use crate::math::DEGENERATE_EPSILON;
use crate::procedural::MeshData;

/// Recompute vertex normals from the triangles that reference each vertex
///
/// Face normals are accumulated unnormalized, so larger triangles weigh
/// more. Vertices are smoothed per index only: vertices that share a
/// position but not an index (UV seams, hard box edges) stay split.
/// Degenerate triangles contribute nothing; a vertex that receives no
/// contribution keeps its previous normal, or +Y if it had none.
pub fn recalculate_normals(mesh: &mut MeshData) {
    let mut accumulated = vec![Vec3::ZERO; mesh.vertex_count()];

    for [a, b, c] in mesh.triangles() {
        let p0 = mesh.position(a);
        let face = (mesh.position(b) - p0).cross(mesh.position(c) - p0);
        if face.length_squared() < DEGENERATE_EPSILON {
            continue;
        }
        for index in [a, b, c] {
            accumulated[index as usize] += face;
        }
    }

    let previous = std::mem::take(&mut mesh.normals);
    mesh.normals = accumulated
        .into_iter()
        .enumerate()
        .map(|(i, sum)| match sum.try_normalize() {
            Some(normal) => normal.to_array(),
            None => previous.get(i).copied().unwrap_or(Vec3::Y.to_array()),
        })
        .collect();
}
