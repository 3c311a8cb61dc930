//! Shape descriptors and generator dispatch
//!
//! A `ShapeDescriptor` carries the parameters of exactly one shape. The
//! descriptor is consumed by [`generate`], which runs the matching generator
//! and assembles the result into an immutable [`MeshBuffer`].
//!
//! Descriptors deserialize from a table tagged by `type`:
//!
//! ```toml
//! type = "cylinder"
//! top_radius = 0.25
//! height = 2.0
//! caps = false
//! ```
//!
//! Missing fields fall back to the per-shape defaults.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::MeshError;
use crate::assembler::{MeshAssembler, MeshBuffer, MeshBuildOptions, SecondaryUvGenerator};
use crate::math::Axis;
use crate::procedural::{self, MeshData};

/// Flat rectangular grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaneParams {
    /// Extent along local X
    pub width: f32,
    /// Extent along local Z
    pub depth: f32,
    /// Subdivisions along the width (min 1)
    pub columns: u32,
    /// Subdivisions along the depth (min 1)
    pub rows: u32,
    /// Direction the plane faces
    pub axis: Axis,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            depth: 1.0,
            columns: 1,
            rows: 1,
            axis: Axis::Y,
        }
    }
}

/// Axis-aligned box with subdivided faces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Face subdivisions along X (min 1)
    pub segments_x: u32,
    /// Face subdivisions along Y (min 1)
    pub segments_y: u32,
    /// Face subdivisions along Z (min 1)
    pub segments_z: u32,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            segments_x: 1,
            segments_y: 1,
            segments_z: 1,
        }
    }
}

/// Latitude/longitude sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f32,
    /// Longitudinal divisions (min 3)
    pub columns: u32,
    /// Latitudinal divisions (min 2)
    pub rows: u32,
    /// Pole-to-pole axis
    pub axis: Axis,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            columns: 24,
            rows: 12,
            axis: Axis::Y,
        }
    }
}

/// Geodesic sphere built from a subdivided icosahedron
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcosphereParams {
    pub radius: f32,
    /// Subdivision steps; 0 is the bare icosahedron
    pub subdivision: u32,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            subdivision: 2,
        }
    }
}

/// Cylinder or truncated cone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub height: f32,
    /// Radial divisions (min 3)
    pub columns: u32,
    /// Divisions along the height (min 1)
    pub rows: u32,
    /// Close both ends with flat caps
    pub caps: bool,
    pub axis: Axis,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            top_radius: 0.5,
            bottom_radius: 0.5,
            height: 1.0,
            columns: 24,
            rows: 1,
            caps: true,
            axis: Axis::Y,
        }
    }
}

/// Box with rounded edges and corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundedBoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Corner radius, at most half the smallest extent
    pub radius: f32,
    /// Segments across each 45 degree half of a rounded edge (min 1)
    pub divisions: u32,
}

impl Default for RoundedBoxParams {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            radius: 0.1,
            divisions: 4,
        }
    }
}

/// Flat annulus, optionally a partial sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Angular divisions (min 3)
    pub segments: u32,
    /// Sweep in degrees, (0, 360]
    pub angle: f32,
    /// Direction the ring faces
    pub axis: Axis,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            inner_radius: 0.3,
            outer_radius: 0.5,
            segments: 32,
            angle: 360.0,
            axis: Axis::Y,
        }
    }
}

/// Flat disc (triangle fan), optionally a partial sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscParams {
    pub radius: f32,
    /// Angular divisions (min 3)
    pub segments: u32,
    /// Sweep in degrees, (0, 360]
    pub angle: f32,
    /// Emit a back face with flipped normals
    pub double_sided: bool,
    /// Direction the front face points
    pub axis: Axis,
}

impl Default for DiscParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            segments: 32,
            angle: 360.0,
            double_sided: false,
            axis: Axis::Y,
        }
    }
}

/// Utah teapot tessellated from its Bezier patches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeapotParams {
    /// Samples per patch edge (min 2)
    pub subdivision: u32,
}

impl Default for TeapotParams {
    fn default() -> Self {
        Self { subdivision: 10 }
    }
}

/// Parameters for exactly one shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    Plane(PlaneParams),
    Box(BoxParams),
    Sphere(SphereParams),
    Icosphere(IcosphereParams),
    Cylinder(CylinderParams),
    RoundedBox(RoundedBoxParams),
    Ring(RingParams),
    Disc(DiscParams),
    Teapot(TeapotParams),
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        ShapeDescriptor::Box(BoxParams::default())
    }
}

/// Shape tag without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Plane,
    Box,
    Sphere,
    Icosphere,
    Cylinder,
    RoundedBox,
    Ring,
    Disc,
    Teapot,
}

impl ShapeKind {
    /// Every shape kind, in declaration order
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Plane,
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Icosphere,
        ShapeKind::Cylinder,
        ShapeKind::RoundedBox,
        ShapeKind::Ring,
        ShapeKind::Disc,
        ShapeKind::Teapot,
    ];

    /// Name used in descriptor files
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Icosphere => "icosphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::RoundedBox => "rounded_box",
            ShapeKind::Ring => "ring",
            ShapeKind::Disc => "disc",
            ShapeKind::Teapot => "teapot",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDescriptor::Plane(_) => ShapeKind::Plane,
            ShapeDescriptor::Box(_) => ShapeKind::Box,
            ShapeDescriptor::Sphere(_) => ShapeKind::Sphere,
            ShapeDescriptor::Icosphere(_) => ShapeKind::Icosphere,
            ShapeDescriptor::Cylinder(_) => ShapeKind::Cylinder,
            ShapeDescriptor::RoundedBox(_) => ShapeKind::RoundedBox,
            ShapeDescriptor::Ring(_) => ShapeKind::Ring,
            ShapeDescriptor::Disc(_) => ShapeKind::Disc,
            ShapeDescriptor::Teapot(_) => ShapeKind::Teapot,
        }
    }

    /// Run the generator for this shape without any assembly passes
    pub fn build_raw(&self) -> Result<MeshData, MeshError> {
        match self {
            ShapeDescriptor::Plane(p) => procedural::generate_plane(p),
            ShapeDescriptor::Box(p) => procedural::generate_box(p),
            ShapeDescriptor::Sphere(p) => procedural::generate_sphere(p),
            ShapeDescriptor::Icosphere(p) => procedural::generate_icosphere(p),
            ShapeDescriptor::Cylinder(p) => procedural::generate_cylinder(p),
            ShapeDescriptor::RoundedBox(p) => procedural::generate_rounded_box(p),
            ShapeDescriptor::Ring(p) => procedural::generate_ring(p),
            ShapeDescriptor::Disc(p) => procedural::generate_disc(p),
            ShapeDescriptor::Teapot(p) => procedural::generate_teapot(p),
        }
    }
}

/// Generate a finalized mesh with default build options
pub fn generate(descriptor: ShapeDescriptor) -> Result<MeshBuffer, MeshError> {
    generate_with(descriptor, &MeshBuildOptions::default(), None)
}

/// Generate a finalized mesh, running the optional passes in `options`
///
/// `secondary_uvs` is required when `options.generate_lightmap_uvs` is set.
pub fn generate_with(
    descriptor: ShapeDescriptor,
    options: &MeshBuildOptions,
    secondary_uvs: Option<&dyn SecondaryUvGenerator>,
) -> Result<MeshBuffer, MeshError> {
    let kind = descriptor.kind();
    let raw = descriptor.build_raw()?;
    debug!(
        "{kind}: generated {} verts, {} triangles",
        raw.vertex_count(),
        raw.triangle_count()
    );

    let assembler = match secondary_uvs {
        Some(generator) => MeshAssembler::new(*options).with_secondary_uvs(generator),
        None => MeshAssembler::new(*options),
    };
    assembler.assemble(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_selects_matching_generator() {
        for kind in ShapeKind::ALL {
            let descriptor = match kind {
                ShapeKind::Plane => ShapeDescriptor::Plane(PlaneParams::default()),
                ShapeKind::Box => ShapeDescriptor::Box(BoxParams::default()),
                ShapeKind::Sphere => ShapeDescriptor::Sphere(SphereParams::default()),
                ShapeKind::Icosphere => ShapeDescriptor::Icosphere(IcosphereParams::default()),
                ShapeKind::Cylinder => ShapeDescriptor::Cylinder(CylinderParams::default()),
                ShapeKind::RoundedBox => ShapeDescriptor::RoundedBox(RoundedBoxParams::default()),
                ShapeKind::Ring => ShapeDescriptor::Ring(RingParams::default()),
                ShapeKind::Disc => ShapeDescriptor::Disc(DiscParams::default()),
                ShapeKind::Teapot => ShapeDescriptor::Teapot(TeapotParams::default()),
            };
            assert_eq!(descriptor.kind(), kind);
            let mesh = generate(descriptor).unwrap();
            assert!(mesh.vertex_count() > 0, "{kind} produced no vertices");
            assert!(mesh.triangle_count() > 0, "{kind} produced no triangles");
        }
    }

    #[test]
    fn test_default_plane_is_single_quad() {
        let mesh = generate(ShapeDescriptor::Plane(PlaneParams::default())).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_invalid_descriptor_returns_no_buffer() {
        let result = generate(ShapeDescriptor::Teapot(TeapotParams { subdivision: 1 }));
        assert!(matches!(
            result,
            Err(MeshError::InvalidParameter {
                parameter: "subdivision",
                ..
            })
        ));
    }

    #[test]
    fn test_descriptor_from_toml_uses_defaults() {
        let descriptor: ShapeDescriptor = toml::from_str(
            r#"
            type = "cylinder"
            top_radius = 0.25
            caps = false
            "#,
        )
        .unwrap();
        assert_eq!(
            descriptor,
            ShapeDescriptor::Cylinder(CylinderParams {
                top_radius: 0.25,
                caps: false,
                ..CylinderParams::default()
            })
        );
    }

    #[test]
    fn test_descriptor_snake_case_tags() {
        let descriptor: ShapeDescriptor = toml::from_str(
            r#"
            type = "rounded_box"
            radius = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(descriptor.kind(), ShapeKind::RoundedBox);

        let plane: ShapeDescriptor = toml::from_str("type = \"plane\"\naxis = \"x\"").unwrap();
        match plane {
            ShapeDescriptor::Plane(p) => assert_eq!(p.axis, Axis::X),
            other => panic!("expected plane, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_shape_type_rejected() {
        let result: Result<ShapeDescriptor, _> = toml::from_str("type = \"torus\"");
        assert!(result.is_err());
    }
}
