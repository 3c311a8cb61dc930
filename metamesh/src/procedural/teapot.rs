//! Bezier patch tessellation (Utah teapot)

use glam::{Vec2, Vec3};
use tracing::warn;

use super::teapot_patches::TEAPOT_PATCHES;
use crate::MeshError;
use crate::bezier::{reduce_columns, surface_point};
use crate::procedural::{MeshBuilder, require_at_least, require_index_range};
use crate::shape::TeapotParams;

/// Generate the Utah teapot from its built-in patch table
///
/// Each of the 32 patches is sampled on an `N × N` grid (`N = subdivision`),
/// giving `32 × N²` vertices and `32 × 2 × (N - 1)²` triangles. Patches are
/// not welded, so seams between patches carry duplicate vertices.
pub fn generate_teapot<M: MeshBuilder>(params: &TeapotParams) -> Result<M, MeshError> {
    generate_teapot_from(&TEAPOT_PATCHES, params.subdivision)
}

/// Tessellate an arbitrary list of bicubic patches (16 control points each)
///
/// # Vertex layout
/// Per patch, vertices are emitted column-major: the outer loop walks `u`
/// along the four source curves, the inner loop walks `v` across them.
/// Vertex `(col, row)` of patch `p` sits at `p·N² + col·N + row` and has
/// UV `(col / (N - 1), row / (N - 1))`.
pub fn generate_teapot_from<M: MeshBuilder>(
    patches: &[Vec3],
    subdivision: u32,
) -> Result<M, MeshError> {
    let n = require_at_least("teapot", "subdivision", subdivision, 2)?;
    if patches.is_empty() || patches.len() % 16 != 0 {
        warn!(
            "teapot: patch table must hold a positive multiple of 16 points (got {})",
            patches.len()
        );
        return Err(MeshError::invalid(
            "patches",
            format!(
                "expected a positive multiple of 16 control points, got {}",
                patches.len()
            ),
        ));
    }
    let patch_count = patches.len() / 16;
    let per_patch = n as u64 * n as u64;
    let vertices = require_index_range("teapot", "subdivision", patch_count as u64 * per_patch)?;

    let mut mesh = M::default();
    let quads_per_patch = (n as usize - 1) * (n as usize - 1);
    mesh.reserve(vertices as usize, patch_count * quads_per_patch * 6);

    let last = (n - 1) as f32;
    for chunk in patches.chunks_exact(16) {
        let patch: [Vec3; 16] = std::array::from_fn(|k| chunk[k]);
        for col in 0..n {
            let u = col as f32 / last;
            let columns = reduce_columns(&patch, u);
            for row in 0..n {
                let v = row as f32 / last;
                let sample = surface_point(&columns, v);
                mesh.add_vertex(sample.position, Vec2::new(u, v), sample.normal);
            }
        }
    }

    let per_patch = n * n;
    for patch in 0..patch_count as u32 {
        let offset = patch * per_patch;
        for a in 0..n - 1 {
            for b in 0..n - 1 {
                let i0 = offset + a * n + b;
                let i1 = i0 + 1;
                let i2 = i0 + n;
                let i3 = i2 + 1;

                mesh.add_triangle(i0, i1, i2);
                mesh.add_triangle(i1, i3, i2);
            }
        }
    }

    Ok(mesh)
}
