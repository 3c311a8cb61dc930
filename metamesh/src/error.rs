//! Mesh generation errors

/// Error returned by shape generators and the mesh assembler.
///
/// Generation is all-or-nothing: when any of these is returned no partial
/// buffer exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A shape parameter is outside its valid range
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    /// Attribute or index data handed to the assembler is inconsistent
    #[error("malformed mesh buffer: {0}")]
    MalformedBuffer(String),

    /// An optional pass was requested without the collaborator that performs it
    #[error("{0} requested but no generator was attached")]
    MissingCollaborator(&'static str),

    /// The secondary UV generator reported a failure
    #[error("secondary UV generation failed: {0}")]
    SecondaryUv(String),
}

impl MeshError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
