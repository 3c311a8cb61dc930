//! Procedural mesh generation
//!
//! Functions for generating the supported primitives with normals and UVs.
//! Every generator validates its parameters up front and returns
//! `MeshError::InvalidParameter` instead of producing degenerate geometry.
//!
//! All generators emit counter-clockwise triangles when viewed from outside.

mod primitives;
mod teapot;
mod teapot_patches;
mod types;


use tracing::warn;

use crate::MeshError;

pub use types::{MeshBuilder, MeshData};

pub use primitives::{
    MAX_ICOSPHERE_SUBDIVISION, generate_box, generate_cylinder, generate_disc,
    generate_icosphere, generate_plane, generate_ring, generate_rounded_box, generate_sphere,
};

pub use teapot::{generate_teapot, generate_teapot_from};
pub use teapot_patches::{TEAPOT_PATCH_COUNT, TEAPOT_PATCHES};

/// Require a finite value strictly greater than zero
pub(crate) fn require_positive(
    shape: &str,
    parameter: &'static str,
    value: f32,
) -> Result<f32, MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        warn!("{shape}: {parameter} must be > 0.0 (got {value})");
        Err(MeshError::invalid(
            parameter,
            format!("must be a positive number, got {value}"),
        ))
    }
}

/// Require an integer count of at least `min`
pub(crate) fn require_at_least(
    shape: &str,
    parameter: &'static str,
    value: u32,
    min: u32,
) -> Result<u32, MeshError> {
    if value >= min {
        Ok(value)
    } else {
        warn!("{shape}: {parameter} must be >= {min} (got {value})");
        Err(MeshError::invalid(
            parameter,
            format!("must be at least {min}, got {value}"),
        ))
    }
}

/// Require a sweep angle in degrees within (0, 360]
pub(crate) fn require_sweep(
    shape: &str,
    parameter: &'static str,
    degrees: f32,
) -> Result<f32, MeshError> {
    if degrees.is_finite() && degrees > 0.0 && degrees <= 360.0 {
        Ok(degrees)
    } else {
        warn!("{shape}: {parameter} must be in (0, 360] degrees (got {degrees})");
        Err(MeshError::invalid(
            parameter,
            format!("must be in (0, 360] degrees, got {degrees}"),
        ))
    }
}

/// Require that a mesh of `vertices` vertices stays addressable with u32 indices
pub(crate) fn require_index_range(
    shape: &str,
    parameter: &'static str,
    vertices: u64,
) -> Result<u32, MeshError> {
    match u32::try_from(vertices) {
        Ok(count) if count < u32::MAX => Ok(count),
        _ => {
            warn!("{shape}: {vertices} vertices exceed the u32 index range");
            Err(MeshError::invalid(
                parameter,
                format!("would produce {vertices} vertices, more than a u32 index buffer can address"),
            ))
        }
    }
}
