//! Mesh buffer assembly
//!
//! Turns the raw [`MeshData`] a generator produced into a validated,
//! immutable [`MeshBuffer`]. Missing normals and UVs are filled in, and the
//! optional passes selected by [`MeshBuildOptions`] run in a fixed order:
//! lightmap UVs, normal recalculation, tangents.

mod buffer;
mod normals;
mod tangents;

pub use buffer::{MeshBuffer, MeshParts, Vertex};
pub use normals::recalculate_normals;
pub use tangents::recalculate_tangents;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::MeshError;
use crate::procedural::MeshData;

/// Optional passes run while assembling a mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshBuildOptions {
    /// Replace generator normals with area-weighted face normals
    pub recalculate_normals: bool,
    /// Compute tangents with handedness from the primary UVs
    pub recalculate_tangents: bool,
    /// Fill `uv1` through the attached [`SecondaryUvGenerator`]
    pub generate_lightmap_uvs: bool,
}

/// Collaborator that lays out non-overlapping secondary UVs
///
/// Implementations may re-index the mesh (for example, split every vertex
/// per triangle) as long as every attribute array stays parallel and `uv1`
/// ends up with one entry per vertex.
pub trait SecondaryUvGenerator {
    fn generate(&self, mesh: &mut MeshData) -> Result<(), MeshError>;
}

/// Builds [`MeshBuffer`]s from raw mesh data
pub struct MeshAssembler<'a> {
    options: MeshBuildOptions,
    secondary_uvs: Option<&'a dyn SecondaryUvGenerator>,
}

impl<'a> MeshAssembler<'a> {
    pub fn new(options: MeshBuildOptions) -> Self {
        Self {
            options,
            secondary_uvs: None,
        }
    }

    /// Attach the generator used when `generate_lightmap_uvs` is set
    pub fn with_secondary_uvs(mut self, generator: &'a dyn SecondaryUvGenerator) -> Self {
        self.secondary_uvs = Some(generator);
        self
    }

    pub fn options(&self) -> &MeshBuildOptions {
        &self.options
    }

    /// Validate `mesh`, run the selected passes and freeze the result
    pub fn assemble(&self, mut mesh: MeshData) -> Result<MeshBuffer, MeshError> {
        validate(&mesh)?;

        let mut normals_fresh = false;
        if mesh.normals.is_empty() {
            recalculate_normals(&mut mesh);
            normals_fresh = true;
        }
        if mesh.uvs.is_empty() {
            mesh.uvs = vec![[0.0; 2]; mesh.vertex_count()];
        }

        if self.options.generate_lightmap_uvs {
            let generator = self
                .secondary_uvs
                .ok_or(MeshError::MissingCollaborator("lightmap UV generation"))?;
            generator.generate(&mut mesh)?;
            match &mesh.uv1 {
                Some(uv1) if uv1.len() == mesh.vertex_count() => {}
                Some(uv1) => {
                    return Err(MeshError::MalformedBuffer(format!(
                        "secondary UV generator produced {} uv1 entries for {} vertices",
                        uv1.len(),
                        mesh.vertex_count()
                    )));
                }
                None => {
                    return Err(MeshError::MalformedBuffer(
                        "secondary UV generator left uv1 empty".into(),
                    ));
                }
            }
            validate(&mesh)?;
            require_filled(&mesh)?;
        }

        if self.options.recalculate_normals && !normals_fresh {
            recalculate_normals(&mut mesh);
        }
        if self.options.recalculate_tangents {
            recalculate_tangents(&mut mesh);
        }

        let buffer = MeshBuffer::freeze(mesh);
        debug!(
            "assembled {} verts, {} triangles (uv1: {}, tangents: {})",
            buffer.vertex_count(),
            buffer.triangle_count(),
            buffer.uv1().is_some(),
            buffer.tangents().is_some()
        );
        Ok(buffer)
    }
}

/// Check attribute lengths and index ranges
fn validate(mesh: &MeshData) -> Result<(), MeshError> {
    let count = mesh.vertex_count();
    if count == 0 {
        return Err(MeshError::MalformedBuffer("mesh has no vertices".into()));
    }
    if mesh.indices.len() % 3 != 0 {
        return Err(MeshError::MalformedBuffer(format!(
            "index count {} is not a multiple of 3",
            mesh.indices.len()
        )));
    }
    if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= count) {
        return Err(MeshError::MalformedBuffer(format!(
            "index {index} out of range for {count} vertices"
        )));
    }

    let optional = [
        ("normals", Some(mesh.normals.len())),
        ("uvs", Some(mesh.uvs.len())),
        ("uv1", mesh.uv1.as_ref().map(Vec::len)),
        ("tangents", mesh.tangents.as_ref().map(Vec::len)),
    ];
    for (name, len) in optional {
        match len {
            Some(len) if len != 0 && len != count => {
                return Err(MeshError::MalformedBuffer(format!(
                    "{name} has {len} entries for {count} vertices"
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Normals and UVs must still cover every vertex after the lightmap pass
fn require_filled(mesh: &MeshData) -> Result<(), MeshError> {
    let count = mesh.vertex_count();
    for (name, len) in [("normals", mesh.normals.len()), ("uvs", mesh.uvs.len())] {
        if len != count {
            return Err(MeshError::MalformedBuffer(format!(
                "secondary UV generator left {name} with {len} entries for {count} vertices"
            )));
        }
    }
    Ok(())
}
