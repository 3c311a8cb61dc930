//! Parametric primitives with UV coordinates
//!
//! Grid-based shapes share one vertex layout: vertex `(i, j)` of a grid with
//! `columns × rows` cells lives at `base + j * (columns + 1) + i`.

mod cylinder;
mod plane_box;
mod ring_disc;
mod rounded_box;
mod sphere;

pub use cylinder::generate_cylinder;
pub use plane_box::{generate_box, generate_plane};
pub use ring_disc::{generate_disc, generate_ring};
pub use rounded_box::generate_rounded_box;
pub use sphere::{MAX_ICOSPHERE_SUBDIVISION, generate_icosphere, generate_sphere};

use super::MeshBuilder;

/// Emit two triangles per cell of a `(columns + 1) × (rows + 1)` vertex grid
///
/// Winding is counter-clockwise when `+i × +j` points toward the viewer.
pub(super) fn add_grid_triangles<M: MeshBuilder>(mesh: &mut M, base: u32, columns: u32, rows: u32) {
    let stride = columns + 1;
    for j in 0..rows {
        for i in 0..columns {
            let i0 = base + j * stride + i;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;

            mesh.add_triangle(i0, i1, i3);
            mesh.add_triangle(i0, i3, i2);
        }
    }
}
