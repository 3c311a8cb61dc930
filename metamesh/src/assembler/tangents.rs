//! Per-vertex tangent recomputation from UV gradients

use glam::{Vec2, Vec3};

use crate::math::DEGENERATE_EPSILON;
use crate::procedural::MeshData;

/// Compute per-vertex tangents from UV gradients (Lengyel's method)
///
/// Expects normals and UVs to be filled. The tangent follows increasing U,
/// is orthogonalized against the vertex normal, and carries the bitangent
/// handedness in `w` (`+1` or `-1`). Vertices whose triangles all have a
/// degenerate UV mapping get an arbitrary unit tangent perpendicular to the
/// normal.
pub fn recalculate_tangents(mesh: &mut MeshData) {
    let count = mesh.vertex_count();
    let mut tangents = vec![Vec3::ZERO; count];
    let mut bitangents = vec![Vec3::ZERO; count];

    for [a, b, c] in mesh.triangles() {
        let p0 = mesh.position(a);
        let e1 = mesh.position(b) - p0;
        let e2 = mesh.position(c) - p0;

        let w0 = Vec2::from(mesh.uvs[a as usize]);
        let d1 = Vec2::from(mesh.uvs[b as usize]) - w0;
        let d2 = Vec2::from(mesh.uvs[c as usize]) - w0;

        let det = d1.perp_dot(d2);
        if det.abs() < DEGENERATE_EPSILON {
            continue;
        }
        let r = det.recip();
        let tangent = (e1 * d2.y - e2 * d1.y) * r;
        let bitangent = (e2 * d1.x - e1 * d2.x) * r;

        for index in [a, b, c] {
            tangents[index as usize] += tangent;
            bitangents[index as usize] += bitangent;
        }
    }

    let result = (0..count)
        .map(|i| {
            let normal = Vec3::from(mesh.normals[i]).normalize_or(Vec3::Y);
            let t = tangents[i];
            let t = (t - normal * normal.dot(t))
                .try_normalize()
                .unwrap_or_else(|| normal.any_orthonormal_vector());
            let w = if normal.cross(t).dot(bitangents[i]) < 0.0 {
                -1.0
            } else {
                1.0
            };
            [t.x, t.y, t.z, w]
        })
        .collect();
    mesh.tangents = Some(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::MeshBuilder;

    fn quad(uvs: [Vec2; 4]) -> MeshData {
        let mut mesh = MeshData::new();
        let positions = [
            Vec3::new(-1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
        ];
        for (p, uv) in positions.into_iter().zip(uvs) {
            mesh.add_vertex(p, uv, Vec3::Y);
        }
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh
    }

    #[test]
    fn test_mirrored_uvs_flip_handedness() {
        let mut mesh = quad([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ]);
        recalculate_tangents(&mut mesh);
        let tangents = mesh.tangents.as_ref().unwrap();
        assert!(tangents.iter().all(|t| t[3] == 1.0));

        let mut mirrored = quad([
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]);
        recalculate_tangents(&mut mirrored);
        for t in mirrored.tangents.as_ref().unwrap() {
            assert!((Vec3::new(t[0], t[1], t[2]) - Vec3::NEG_X).length() < 1e-5);
            assert_eq!(t[3], -1.0);
        }
    }

    #[test]
    fn test_degenerate_uvs_fall_back_to_perpendicular() {
        let mut mesh = quad([Vec2::ZERO; 4]);
        recalculate_tangents(&mut mesh);
        for t in mesh.tangents.as_ref().unwrap() {
            let tangent = Vec3::new(t[0], t[1], t[2]);
            assert!((tangent.length() - 1.0).abs() < 1e-5);
            assert!(tangent.dot(Vec3::Y).abs() < 1e-5);
        }
    }
}
