//! Flat radial primitives (ring, disc)

use glam::{Vec2, Vec3};
use tracing::warn;

use crate::MeshError;
use crate::procedural::{
    MeshBuilder, require_at_least, require_index_range, require_positive, require_sweep,
};
use crate::shape::{DiscParams, RingParams};

/// Unit direction in the XZ plane at `angle` radians, counter-clockwise seen from +Y
#[inline]
fn radial(angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (cos, -sin)
}

/// Generate a flat annulus facing `params.axis`
///
/// A sweep below 360 degrees produces an arc starting on +X. Vertices come
/// in inner/outer pairs, one pair per segment boundary.
///
/// # UV Mapping
/// - U maps 0→1 along the sweep
/// - V is 0 on the inner edge and 1 on the outer edge
pub fn generate_ring<M: MeshBuilder>(params: &RingParams) -> Result<M, MeshError> {
    let inner_radius = require_positive("ring", "inner_radius", params.inner_radius)?;
    let outer_radius = require_positive("ring", "outer_radius", params.outer_radius)?;
    if outer_radius <= inner_radius {
        warn!(
            "ring: outer_radius must be > inner_radius (got {outer_radius} <= {inner_radius})"
        );
        return Err(MeshError::invalid(
            "outer_radius",
            format!("must exceed inner_radius {inner_radius}, got {outer_radius}"),
        ));
    }
    let segments = require_at_least("ring", "segments", params.segments, 3)?;
    let sweep = require_sweep("ring", "angle", params.angle)?.to_radians();
    let vertices = require_index_range("ring", "segments", 2 * (segments as u64 + 1))?;

    let axis = params.axis;
    let normal = axis.unit();

    let mut mesh = M::default();
    mesh.reserve(vertices as usize, segments as usize * 6);

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (x, z) = radial(u * sweep);
        mesh.add_vertex(
            axis.orient(Vec3::new(x * inner_radius, 0.0, z * inner_radius)),
            Vec2::new(u, 0.0),
            normal,
        );
        mesh.add_vertex(
            axis.orient(Vec3::new(x * outer_radius, 0.0, z * outer_radius)),
            Vec2::new(u, 1.0),
            normal,
        );
    }

    for i in 0..segments {
        let i0 = i * 2;
        let (i1, i2, i3) = (i0 + 1, i0 + 2, i0 + 3);
        mesh.add_triangle(i0, i1, i3);
        mesh.add_triangle(i0, i3, i2);
    }

    Ok(mesh)
}

/// Generate a flat disc as a triangle fan around its center
///
/// With `double_sided` set a second fan with flipped normals and reversed
/// winding is appended, so the disc renders from both sides with culling on.
///
/// # UV Mapping
/// Planar projection of the unit disc into the 0→1 square; V runs along -Z
/// on the front face.
pub fn generate_disc<M: MeshBuilder>(params: &DiscParams) -> Result<M, MeshError> {
    let radius = require_positive("disc", "radius", params.radius)?;
    let segments = require_at_least("disc", "segments", params.segments, 3)?;
    let sweep = require_sweep("disc", "angle", params.angle)?.to_radians();
    let sides: u64 = if params.double_sided { 2 } else { 1 };
    let vertices = require_index_range("disc", "segments", sides * (segments as u64 + 2))?;

    let mut mesh = M::default();
    mesh.reserve(vertices as usize, sides as usize * segments as usize * 3);

    add_fan(&mut mesh, params, radius, segments, sweep, true);
    if params.double_sided {
        add_fan(&mut mesh, params, radius, segments, sweep, false);
    }

    Ok(mesh)
}

fn add_fan<M: MeshBuilder>(
    mesh: &mut M,
    params: &DiscParams,
    radius: f32,
    segments: u32,
    sweep: f32,
    front: bool,
) {
    let axis = params.axis;
    let normal = if front { axis.unit() } else { -axis.unit() };

    let center = mesh.add_vertex(Vec3::ZERO, Vec2::splat(0.5), normal);
    let rim = mesh.next_index();
    for i in 0..=segments {
        let (x, z) = radial(i as f32 / segments as f32 * sweep);
        let uv = if front {
            Vec2::new(0.5 + 0.5 * x, 0.5 - 0.5 * z)
        } else {
            Vec2::new(0.5 + 0.5 * x, 0.5 + 0.5 * z)
        };
        mesh.add_vertex(axis.orient(Vec3::new(x * radius, 0.0, z * radius)), uv, normal);
    }

    for i in 0..segments {
        if front {
            mesh.add_triangle(center, rim + i, rim + i + 1);
        } else {
            mesh.add_triangle(center, rim + i + 1, rim + i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::MeshData;

    #[test]
    fn test_ring_counts() {
        let mesh: MeshData = generate_ring(&RingParams {
            segments: 8,
            ..RingParams::default()
        })
        .unwrap();
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.triangle_count(), 16);
    }

    #[test]
    fn test_ring_radii_bound_positions() {
        let params = RingParams::default();
        let mesh: MeshData = generate_ring(&params).unwrap();
        for p in &mesh.positions {
            let r = Vec3::from(*p).length();
            assert!(r >= params.inner_radius - 1e-5 && r <= params.outer_radius + 1e-5);
        }
    }

    #[test]
    fn test_ring_requires_outer_larger_than_inner() {
        let result: Result<MeshData, _> = generate_ring(&RingParams {
            inner_radius: 0.5,
            outer_radius: 0.5,
            ..RingParams::default()
        });
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter {
                parameter: "outer_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_sweep_ends_on_angle() {
        let mesh: MeshData = generate_disc(&DiscParams {
            radius: 1.0,
            segments: 4,
            angle: 90.0,
            ..DiscParams::default()
        })
        .unwrap();
        // Fan ends at 90 degrees counter-clockwise from +X seen from above: -Z
        let last = Vec3::from(mesh.positions[mesh.vertex_count() - 1]);
        assert!((last - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_double_sided_disc() {
        let single: MeshData = generate_disc(&DiscParams::default()).unwrap();
        let double: MeshData = generate_disc(&DiscParams {
            double_sided: true,
            ..DiscParams::default()
        })
        .unwrap();
        assert_eq!(double.vertex_count(), single.vertex_count() * 2);
        assert_eq!(double.triangle_count(), single.triangle_count() * 2);
        assert_eq!(double.normals.last(), Some(&[0.0, -1.0, 0.0]));
    }

    #[test]
    fn test_sweep_out_of_range() {
        for angle in [0.0, -10.0, 360.5] {
            let result: Result<MeshData, _> = generate_disc(&DiscParams {
                angle,
                ..DiscParams::default()
            });
            assert!(result.is_err(), "angle {angle}");
        }
    }
}
