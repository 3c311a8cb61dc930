//! `.metamesh` descriptor file parsing
//!
//! ```toml
//! [shape]
//! type = "teapot"
//! subdivision = 10
//!
//! [options]
//! generate_lightmap_uvs = true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use metamesh::{MeshBuildOptions, ShapeDescriptor};
use serde::Deserialize;

/// File extension of descriptor files
pub const DESCRIPTOR_EXTENSION: &str = "metamesh";

/// A persisted shape descriptor plus its build options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetameshFile {
    pub shape: ShapeDescriptor,
    #[serde(default)]
    pub options: MeshBuildOptions,
}

impl MetameshFile {
    /// Load a descriptor file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid descriptor: {}", path.display()))
    }

    /// Parse descriptor file contents
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse descriptor TOML")
    }
}
