//! metamesh - procedural mesh generation
//!
//! Builds indexed triangle meshes (positions, normals, UVs, indices) from
//! small parametric shape descriptors: plane, box, rounded box, sphere,
//! icosphere, cylinder, ring, disc and the Bezier-patch Utah teapot.
//!
//! ```no_run
//! use metamesh::{generate, ShapeDescriptor, TeapotParams};
//!
//! let mesh = generate(ShapeDescriptor::Teapot(TeapotParams { subdivision: 8 }))?;
//! assert_eq!(mesh.triangle_count(), 32 * 7 * 7 * 2);
//! # Ok::<(), metamesh::MeshError>(())
//! ```
//!
//! Generation is a pure function of the descriptor. The only shared data is
//! the constant teapot control-point table.

pub mod assembler;
pub mod bezier;
mod error;
pub mod export;
pub mod math;
pub mod procedural;
pub mod shape;

pub use assembler::{
    MeshAssembler, MeshBuffer, MeshBuildOptions, MeshParts, SecondaryUvGenerator, Vertex,
};
pub use error::MeshError;
pub use export::write_obj;
pub use math::{Aabb, Axis};
pub use procedural::{MeshBuilder, MeshData};
pub use shape::{
    BoxParams, CylinderParams, DiscParams, IcosphereParams, PlaneParams, RingParams,
    RoundedBoxParams, ShapeDescriptor, ShapeKind, SphereParams, TeapotParams, generate,
    generate_with,
};
