//! Spherical primitives (UV sphere, icosphere)

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use hashbrown::HashMap;
use tracing::warn;

use crate::MeshError;
use crate::procedural::{MeshBuilder, require_at_least, require_index_range, require_positive};
use crate::shape::{IcosphereParams, SphereParams};

/// Highest accepted icosphere subdivision level (163,842 vertices)
pub const MAX_ICOSPHERE_SUBDIVISION: u32 = 7;

/// Generate a UV sphere with smooth normals and equirectangular UV mapping
///
/// # Arguments
/// * `params.radius` - Sphere radius
/// * `params.columns` - Longitudinal divisions (min 3)
/// * `params.rows` - Latitudinal divisions (min 2)
/// * `params.axis` - Pole-to-pole axis
///
/// # Returns
/// Mesh with `(rows + 1) × (columns + 1)` vertices and `2 × columns × (rows - 1)`
/// triangles. The pole rows carry one triangle per column instead of two.
///
/// # UV Mapping
/// - U: longitude wraps 0→1, with duplicate seam vertices at U=1
/// - V: latitude maps 1 at the top pole to 0 at the bottom pole
pub fn generate_sphere<M: MeshBuilder>(params: &SphereParams) -> Result<M, MeshError> {
    let radius = require_positive("sphere", "radius", params.radius)?;
    let columns = require_at_least("sphere", "columns", params.columns, 3)?;
    let rows = require_at_least("sphere", "rows", params.rows, 2)?;
    let vertices = require_index_range(
        "sphere",
        "columns",
        (columns as u64 + 1) * (rows as u64 + 1),
    )?;

    let axis = params.axis;
    let mut mesh = M::default();
    mesh.reserve(
        vertices as usize,
        columns as usize * (rows as usize - 1) * 6,
    );

    for j in 0..=rows {
        let v = j as f32 / rows as f32;
        let (sin_phi, cos_phi) = (v * PI).sin_cos();
        for i in 0..=columns {
            let u = i as f32 / columns as f32;
            let (sin_theta, cos_theta) = (u * TAU).sin_cos();
            let normal = axis.orient(Vec3::new(
                sin_phi * cos_theta,
                cos_phi,
                -sin_phi * sin_theta,
            ));
            mesh.add_vertex(normal * radius, Vec2::new(u, 1.0 - v), normal);
        }
    }

    let stride = columns + 1;
    for j in 0..rows {
        for i in 0..columns {
            let i0 = j * stride + i;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;

            // The top row's i0/i1 and the bottom row's i2/i3 share a pole
            if j != 0 {
                mesh.add_triangle(i0, i2, i1);
            }
            if j != rows - 1 {
                mesh.add_triangle(i1, i2, i3);
            }
        }
    }

    Ok(mesh)
}

/// Unit icosahedron built on the golden ratio, faces wound outward
fn icosahedron() -> (Vec<Vec3>, Vec<[u32; 3]>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let len = (1.0 + phi * phi).sqrt();
    let a = 1.0 / len;
    let b = phi / len;

    let vertices = vec![
        Vec3::new(-a, b, 0.0),
        Vec3::new(a, b, 0.0),
        Vec3::new(-a, -b, 0.0),
        Vec3::new(a, -b, 0.0),
        Vec3::new(0.0, -a, b),
        Vec3::new(0.0, a, b),
        Vec3::new(0.0, -a, -b),
        Vec3::new(0.0, a, -b),
        Vec3::new(b, 0.0, -a),
        Vec3::new(b, 0.0, a),
        Vec3::new(-b, 0.0, -a),
        Vec3::new(-b, 0.0, a),
    ];

    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    (vertices, faces)
}

/// Split every triangle into four, projecting new edge midpoints onto the unit sphere
fn subdivide(vertices: &mut Vec<Vec3>, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
    let mut midpoint = |a: u32, b: u32| -> u32 {
        let key = if a < b { (a, b) } else { (b, a) };
        *midpoints.entry(key).or_insert_with(|| {
            let mid = (vertices[a as usize] + vertices[b as usize]).normalize();
            vertices.push(mid);
            (vertices.len() - 1) as u32
        })
    };

    let mut next = Vec::with_capacity(faces.len() * 4);
    for &[a, b, c] in faces {
        let ab = midpoint(a, b);
        let bc = midpoint(b, c);
        let ca = midpoint(c, a);

        next.push([a, ab, ca]);
        next.push([b, bc, ab]);
        next.push([c, ca, bc]);
        next.push([ab, bc, ca]);
    }
    next
}

/// Generate a geodesic sphere by recursively subdividing an icosahedron
///
/// Each level splits every triangle into four, giving `20 × 4^subdivision`
/// triangles and `10 × 4^subdivision + 2` vertices. Vertices are shared
/// across triangles, so the mesh is watertight but the UV seam is not split:
/// triangles that straddle `u = 0` interpolate U back across the whole
/// texture. Use [`generate_sphere`] when the mesh needs a clean UV wrap.
pub fn generate_icosphere<M: MeshBuilder>(params: &IcosphereParams) -> Result<M, MeshError> {
    let radius = require_positive("icosphere", "radius", params.radius)?;
    let subdivision = params.subdivision;
    if subdivision > MAX_ICOSPHERE_SUBDIVISION {
        warn!(
            "icosphere: subdivision must be <= {MAX_ICOSPHERE_SUBDIVISION} (got {subdivision})"
        );
        return Err(MeshError::invalid(
            "subdivision",
            format!("must be at most {MAX_ICOSPHERE_SUBDIVISION}, got {subdivision}"),
        ));
    }

    let (mut vertices, mut faces) = icosahedron();
    for _ in 0..subdivision {
        faces = subdivide(&mut vertices, &faces);
    }

    let mut mesh = M::default();
    mesh.reserve(vertices.len(), faces.len() * 3);

    for normal in vertices {
        let u = ((-normal.z).atan2(normal.x) / TAU).rem_euclid(1.0);
        let v = 1.0 - normal.y.clamp(-1.0, 1.0).acos() / PI;
        mesh.add_vertex(normal * radius, Vec2::new(u, v), normal);
    }
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::MeshData;

    #[test]
    fn test_sphere_counts() {
        let mesh: MeshData = generate_sphere(&SphereParams {
            columns: 8,
            rows: 4,
            ..SphereParams::default()
        })
        .unwrap();
        assert_eq!(mesh.vertex_count(), 9 * 5);
        assert_eq!(mesh.triangle_count(), 8 * 3 * 2);
    }

    #[test]
    fn test_sphere_minimum_rows() {
        let mesh: MeshData = generate_sphere(&SphereParams {
            columns: 3,
            rows: 2,
            ..SphereParams::default()
        })
        .unwrap();
        assert_eq!(mesh.triangle_count(), 6);

        let result: Result<MeshData, _> = generate_sphere(&SphereParams {
            rows: 1,
            ..SphereParams::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_icosahedron_faces_point_outward() {
        let (vertices, faces) = icosahedron();
        for [a, b, c] in faces {
            let (a, b, c) = (
                vertices[a as usize],
                vertices[b as usize],
                vertices[c as usize],
            );
            let normal = (b - a).cross(c - a);
            assert!(normal.dot(a + b + c) > 0.0);
        }
    }

    #[test]
    fn test_icosphere_counts() {
        for subdivision in 0..=3 {
            let mesh: MeshData = generate_icosphere(&IcosphereParams {
                radius: 1.0,
                subdivision,
            })
            .unwrap();
            let scale = 4usize.pow(subdivision);
            assert_eq!(mesh.vertex_count(), 10 * scale + 2);
            assert_eq!(mesh.triangle_count(), 20 * scale);
        }
    }

    #[test]
    fn test_icosphere_subdivision_limit() {
        let result: Result<MeshData, _> = generate_icosphere(&IcosphereParams {
            radius: 1.0,
            subdivision: MAX_ICOSPHERE_SUBDIVISION + 1,
        });
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter {
                parameter: "subdivision",
                ..
            })
        ));
    }
}
