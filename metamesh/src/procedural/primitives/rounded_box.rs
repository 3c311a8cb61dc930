//! Box with rounded edges and corners

use std::f32::consts::FRAC_PI_4;

use glam::{Vec2, Vec3};
use tracing::warn;

use super::add_grid_triangles;
use super::plane_box::BOX_FACES;
use crate::MeshError;
use crate::procedural::{MeshBuilder, require_at_least, require_index_range, require_positive};
use crate::shape::RoundedBoxParams;

/// Samples closer than this to their predecessor are merged
const SAMPLE_EPSILON: f32 = 1e-6;

/// Sample coordinates across one axis of a rounded box face
///
/// The flat middle `[-inner, inner]` is a single cell; each rounded end gets
/// `divisions` cells spaced by `tan` so that, once projected onto the edge
/// cylinder, they cover equal angles.
fn axis_samples(half: f32, radius: f32, divisions: u32) -> Vec<f32> {
    let inner = half - radius;
    let step = |k: u32| radius * (k as f32 / divisions as f32 * FRAC_PI_4).tan();

    let mut samples = Vec::with_capacity(2 * divisions as usize + 2);
    let candidates = (0..=divisions)
        .rev()
        .map(|k| -inner - step(k))
        .chain((0..=divisions).map(|k| inner + step(k)));
    for s in candidates {
        if samples
            .last()
            .is_none_or(|&prev: &f32| s - prev > SAMPLE_EPSILON)
        {
            samples.push(s);
        }
    }
    samples
}

/// Generate a box whose edges and corners are rounded with `params.radius`
///
/// Every face is a grid sampled across the full box extent and then pushed
/// onto the rounded surface: each sample is clamped to the inner box (the
/// box shrunk by `radius`) and re-extended by `radius` along the offset
/// direction, which also becomes the vertex normal. Flat regions keep the
/// face normal; edge and corner regions get smoothly varying normals.
///
/// # Arguments
/// * `params.width`, `params.height`, `params.depth` - Full extents
/// * `params.radius` - Rounding radius, `0 < radius <= min(extent) / 2`
/// * `params.divisions` - Segments per 45 degrees of rounding (min 1)
///
/// # UV Mapping
/// Every face maps the full 0→1 square as on the plain box.
pub fn generate_rounded_box<M: MeshBuilder>(params: &RoundedBoxParams) -> Result<M, MeshError> {
    let half = Vec3::new(
        require_positive("rounded_box", "width", params.width)?,
        require_positive("rounded_box", "height", params.height)?,
        require_positive("rounded_box", "depth", params.depth)?,
    ) * 0.5;
    let radius = require_positive("rounded_box", "radius", params.radius)?;
    let max_radius = half.min_element();
    if radius > max_radius {
        warn!("rounded_box: radius must be <= {max_radius} (got {radius})");
        return Err(MeshError::invalid(
            "radius",
            format!("must not exceed half the smallest extent ({max_radius}), got {radius}"),
        ));
    }
    let divisions = require_at_least("rounded_box", "divisions", params.divisions, 1)?;

    let samples = [
        axis_samples(half.x, radius, divisions),
        axis_samples(half.y, radius, divisions),
        axis_samples(half.z, radius, divisions),
    ];

    let vertex_total: u64 = BOX_FACES
        .iter()
        .map(|face| (samples[face.right_axis].len() * samples[face.up_axis].len()) as u64)
        .sum();
    let vertices = require_index_range("rounded_box", "divisions", vertex_total)?;

    let inner = half - Vec3::splat(radius);

    let mut mesh = M::default();
    mesh.reserve(vertices as usize, 0);

    for face in &BOX_FACES {
        let across = &samples[face.right_axis];
        let along = &samples[face.up_axis];
        let columns = across.len() as u32 - 1;
        let rows = along.len() as u32 - 1;
        let base = mesh.next_index();
        let center = face.normal * half;

        for (j, &b) in along.iter().enumerate() {
            let v = j as f32 / rows as f32;
            for (i, &a) in across.iter().enumerate() {
                let u = i as f32 / columns as f32;
                let point = center + face.right * a + face.up * b;
                let core = point.clamp(-inner, inner);
                // The face-normal component is always at least `radius`
                let normal = (point - core).normalize();
                mesh.add_vertex(core + normal * radius, Vec2::new(u, v), normal);
            }
        }

        add_grid_triangles(&mut mesh, base, columns, rows);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::MeshData;

    #[test]
    fn test_axis_samples_span_full_extent() {
        let samples = axis_samples(0.5, 0.1, 4);
        assert_eq!(samples.len(), 10);
        assert!((samples[0] + 0.5).abs() < 1e-6);
        assert!((samples[9] - 0.5).abs() < 1e-6);
        assert!(samples.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_axis_samples_merge_when_fully_rounded() {
        // radius == half: the flat middle collapses to a single sample
        let samples = axis_samples(0.5, 0.5, 2);
        assert_eq!(samples.len(), 5);
        assert!(samples[2].abs() < 1e-6);
    }

    #[test]
    fn test_surface_distance_from_inner_box() {
        let params = RoundedBoxParams {
            width: 2.0,
            height: 1.0,
            depth: 1.5,
            radius: 0.25,
            divisions: 3,
        };
        let mesh: MeshData = generate_rounded_box(&params).unwrap();
        let inner = Vec3::new(0.75, 0.25, 0.5);
        for p in &mesh.positions {
            let p = Vec3::from(*p);
            let distance = (p - p.clamp(-inner, inner)).length();
            assert!((distance - params.radius).abs() < 1e-5, "{p}");
        }
    }

    #[test]
    fn test_radius_equal_half_extent_is_sphere_like() {
        let mesh: MeshData = generate_rounded_box(&RoundedBoxParams {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            radius: 0.5,
            divisions: 4,
        })
        .unwrap();
        for p in &mesh.positions {
            assert!((Vec3::from(*p).length() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_radius_too_large() {
        let result: Result<MeshData, _> = generate_rounded_box(&RoundedBoxParams {
            height: 0.1,
            radius: 0.2,
            ..RoundedBoxParams::default()
        });
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter {
                parameter: "radius",
                ..
            })
        ));
    }
}
