//! Cylinder and truncated cone

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use super::add_grid_triangles;
use crate::MeshError;
use crate::math::Axis;
use crate::procedural::{MeshBuilder, require_at_least, require_index_range, require_positive};
use crate::shape::CylinderParams;

/// Generate a cylinder (or truncated cone when the radii differ)
///
/// # Arguments
/// * `params.top_radius` / `params.bottom_radius` - Radii at +height/2 and -height/2
/// * `params.height` - Total height, centered on the origin
/// * `params.columns` - Radial divisions (min 3)
/// * `params.rows` - Height divisions (min 1)
/// * `params.caps` - Close both ends with flat triangle fans
/// * `params.axis` - Axis the cylinder runs along
///
/// # Returns
/// Side grid of `(columns + 1) × (rows + 1)` vertices, plus `columns + 2`
/// vertices per cap (center and a closed rim).
///
/// # UV Mapping
/// - Side: U wraps 0→1 around the axis, V maps 0→1 bottom to top
/// - Caps: planar projection into the unit square
pub fn generate_cylinder<M: MeshBuilder>(params: &CylinderParams) -> Result<M, MeshError> {
    let top_radius = require_positive("cylinder", "top_radius", params.top_radius)?;
    let bottom_radius = require_positive("cylinder", "bottom_radius", params.bottom_radius)?;
    let height = require_positive("cylinder", "height", params.height)?;
    let columns = require_at_least("cylinder", "columns", params.columns, 3)?;
    let rows = require_at_least("cylinder", "rows", params.rows, 1)?;

    let side_vertices = (columns as u64 + 1) * (rows as u64 + 1);
    let cap_vertices = if params.caps {
        2 * (columns as u64 + 2)
    } else {
        0
    };
    let vertices = require_index_range("cylinder", "columns", side_vertices + cap_vertices)?;

    let axis = params.axis;
    let half_height = height * 0.5;

    // The slant normal tilts toward +Y when the cone narrows upward
    let slant = Vec2::new(height, bottom_radius - top_radius).normalize();

    let mut mesh = M::default();
    mesh.reserve(vertices as usize, 0);

    for j in 0..=rows {
        let v = j as f32 / rows as f32;
        let y = v * height - half_height;
        let radius = bottom_radius + (top_radius - bottom_radius) * v;

        for i in 0..=columns {
            let u = i as f32 / columns as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let (x, z) = (cos, -sin);

            let position = Vec3::new(radius * x, y, radius * z);
            let normal = Vec3::new(slant.x * x, slant.y, slant.x * z);
            mesh.add_vertex(axis.orient(position), Vec2::new(u, v), axis.orient(normal));
        }
    }

    add_grid_triangles(&mut mesh, 0, columns, rows);

    if params.caps {
        add_cap(&mut mesh, axis, columns, half_height, top_radius, true);
        add_cap(&mut mesh, axis, columns, -half_height, bottom_radius, false);
    }

    Ok(mesh)
}

/// Flat triangle fan closing one end of the cylinder
fn add_cap<M: MeshBuilder>(
    mesh: &mut M,
    axis: Axis,
    columns: u32,
    y: f32,
    radius: f32,
    top: bool,
) {
    let normal = axis.orient(if top { Vec3::Y } else { Vec3::NEG_Y });
    let center = mesh.add_vertex(
        axis.orient(Vec3::new(0.0, y, 0.0)),
        Vec2::splat(0.5),
        normal,
    );

    let rim = mesh.next_index();
    for i in 0..=columns {
        let (sin, cos) = (i as f32 / columns as f32 * TAU).sin_cos();
        let (x, z) = (cos, -sin);
        // Mirror V on the bottom cap so both caps read unflipped from outside
        let uv = if top {
            Vec2::new(0.5 + 0.5 * x, 0.5 - 0.5 * z)
        } else {
            Vec2::new(0.5 + 0.5 * x, 0.5 + 0.5 * z)
        };
        mesh.add_vertex(axis.orient(Vec3::new(radius * x, y, radius * z)), uv, normal);
    }

    for i in 0..columns {
        if top {
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
    fn test_cylinder_counts() {
        let params = CylinderParams {
            columns: 6,
            rows: 2,
            ..CylinderParams::default()
        };
        let mesh: MeshData = generate_cylinder(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 7 * 3 + 2 * 8);
        assert_eq!(mesh.triangle_count(), 6 * 2 * 2 + 2 * 6);

        let open: MeshData = generate_cylinder(&CylinderParams {
            caps: false,
            ..params
        })
        .unwrap();
        assert_eq!(open.vertex_count(), 7 * 3);
        assert_eq!(open.triangle_count(), 6 * 2 * 2);
    }

    #[test]
    fn test_straight_side_normals_are_horizontal() {
        let mesh: MeshData = generate_cylinder(&CylinderParams {
            caps: false,
            ..CylinderParams::default()
        })
        .unwrap();
        for n in &mesh.normals {
            assert!(n[1].abs() < 1e-6);
            assert!((Vec3::from(*n).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cone_normals_tilt_up() {
        let mesh: MeshData = generate_cylinder(&CylinderParams {
            top_radius: 0.1,
            bottom_radius: 1.0,
            caps: false,
            ..CylinderParams::default()
        })
        .unwrap();
        assert!(mesh.normals.iter().all(|n| n[1] > 0.0));
    }

    #[test]
    fn test_cylinder_rejects_zero_radius() {
        let result: Result<MeshData, _> = generate_cylinder(&CylinderParams {
            top_radius: 0.0,
            ..CylinderParams::default()
        });
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter {
                parameter: "top_radius",
                ..
            })
        ));
    }
}
