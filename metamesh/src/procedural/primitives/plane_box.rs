//! Flat grid primitives (plane, box)

use glam::{Vec2, Vec3};

use super::add_grid_triangles;
use crate::MeshError;
use crate::procedural::{MeshBuilder, require_at_least, require_index_range, require_positive};
use crate::shape::{BoxParams, PlaneParams};

/// Generate a subdivided plane centered on the origin
///
/// # Arguments
/// * `params.width` - Extent along local X
/// * `params.depth` - Extent along local Z
/// * `params.columns` - Subdivisions along X (min 1)
/// * `params.rows` - Subdivisions along Z (min 1)
/// * `params.axis` - Direction of the face normal
///
/// # Returns
/// Mesh with `(columns + 1) × (rows + 1)` vertices and `2 × columns × rows` triangles
///
/// # UV Mapping
/// - U maps 0→1 along +X
/// - V maps 0→1 along -Z (away from the viewer when looking down -Z)
pub fn generate_plane<M: MeshBuilder>(params: &PlaneParams) -> Result<M, MeshError> {
    let width = require_positive("plane", "width", params.width)?;
    let depth = require_positive("plane", "depth", params.depth)?;
    let columns = require_at_least("plane", "columns", params.columns, 1)?;
    let rows = require_at_least("plane", "rows", params.rows, 1)?;
    let vertices = require_index_range(
        "plane",
        "columns",
        (columns as u64 + 1) * (rows as u64 + 1),
    )?;

    let axis = params.axis;
    let normal = axis.unit();

    let mut mesh = M::default();
    mesh.reserve(vertices as usize, columns as usize * rows as usize * 6);

    for j in 0..=rows {
        let v = j as f32 / rows as f32;
        let z = depth * 0.5 - v * depth;
        for i in 0..=columns {
            let u = i as f32 / columns as f32;
            let x = u * width - width * 0.5;
            mesh.add_vertex(axis.orient(Vec3::new(x, 0.0, z)), Vec2::new(u, v), normal);
        }
    }

    add_grid_triangles(&mut mesh, 0, columns, rows);

    Ok(mesh)
}

/// One face of an axis-aligned box: `right × up == normal`
pub(super) struct BoxFace {
    pub normal: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub right_axis: usize,
    pub up_axis: usize,
}

pub(super) const BOX_FACES: [BoxFace; 6] = [
    // +X
    BoxFace {
        normal: Vec3::X,
        right: Vec3::NEG_Z,
        up: Vec3::Y,
        right_axis: 2,
        up_axis: 1,
    },
    // -X
    BoxFace {
        normal: Vec3::NEG_X,
        right: Vec3::Z,
        up: Vec3::Y,
        right_axis: 2,
        up_axis: 1,
    },
    // +Y
    BoxFace {
        normal: Vec3::Y,
        right: Vec3::X,
        up: Vec3::NEG_Z,
        right_axis: 0,
        up_axis: 2,
    },
    // -Y
    BoxFace {
        normal: Vec3::NEG_Y,
        right: Vec3::X,
        up: Vec3::Z,
        right_axis: 0,
        up_axis: 2,
    },
    // +Z
    BoxFace {
        normal: Vec3::Z,
        right: Vec3::X,
        up: Vec3::Y,
        right_axis: 0,
        up_axis: 1,
    },
    // -Z
    BoxFace {
        normal: Vec3::NEG_Z,
        right: Vec3::NEG_X,
        up: Vec3::Y,
        right_axis: 0,
        up_axis: 1,
    },
];

/// Generate an axis-aligned box with independently subdivided faces
///
/// Each face is its own grid with flat normals, so edges and corners are
/// duplicated per face.
///
/// # Arguments
/// * `params.width`, `params.height`, `params.depth` - Full extents along X, Y, Z
/// * `params.segments_x`, `params.segments_y`, `params.segments_z` - Face
///   subdivisions along each axis (min 1)
///
/// # UV Mapping
/// Every face maps the full 0→1 square, U along the face's right vector and
/// V along its up vector.
pub fn generate_box<M: MeshBuilder>(params: &BoxParams) -> Result<M, MeshError> {
    let half = Vec3::new(
        require_positive("box", "width", params.width)?,
        require_positive("box", "height", params.height)?,
        require_positive("box", "depth", params.depth)?,
    ) * 0.5;
    let segments = [
        require_at_least("box", "segments_x", params.segments_x, 1)?,
        require_at_least("box", "segments_y", params.segments_y, 1)?,
        require_at_least("box", "segments_z", params.segments_z, 1)?,
    ];

    let vertex_total: u64 = BOX_FACES
        .iter()
        .map(|face| {
            (segments[face.right_axis] as u64 + 1) * (segments[face.up_axis] as u64 + 1)
        })
        .sum();
    let vertices = require_index_range("box", "segments_x", vertex_total)?;

    let mut mesh = M::default();
    mesh.reserve(vertices as usize, 0);

    for face in &BOX_FACES {
        let columns = segments[face.right_axis];
        let rows = segments[face.up_axis];
        let base = mesh.next_index();

        let center = face.normal * half;
        let right = face.right * half[face.right_axis];
        let up = face.up * half[face.up_axis];

        for j in 0..=rows {
            let v = j as f32 / rows as f32;
            for i in 0..=columns {
                let u = i as f32 / columns as f32;
                let position = center + right * (u * 2.0 - 1.0) + up * (v * 2.0 - 1.0);
                mesh.add_vertex(position, Vec2::new(u, v), face.normal);
            }
        }

        add_grid_triangles(&mut mesh, base, columns, rows);
    }

    Ok(mesh)
}
