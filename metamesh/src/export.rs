//! Wavefront OBJ export

use std::io::{self, Write};

use crate::assembler::MeshBuffer;

/// Write `mesh` as a single OBJ object named `name`
///
/// Vertices, UVs and normals share one index space, so every face corner is
/// written as `i/i/i` (1-based). Tangents and secondary UVs have no OBJ
/// counterpart and are omitted.
pub fn write_obj<W: Write>(mesh: &MeshBuffer, name: &str, mut out: W) -> io::Result<()> {
    writeln!(out, "# metamesh")?;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(out, "o {name}")?;

    for [x, y, z] in mesh.positions() {
        writeln!(out, "v {x} {y} {z}")?;
    }
    for [u, v] in mesh.uvs() {
        writeln!(out, "vt {u} {v}")?;
    }
    for [x, y, z] in mesh.normals() {
        writeln!(out, "vn {x} {y} {z}")?;
    }

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    out.flush()
}
