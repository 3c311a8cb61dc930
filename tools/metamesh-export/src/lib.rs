//! metamesh-export library
//!
//! Descriptor-file loading, lightmap atlas packing and the build driver used
//! by the `metamesh-export` binary.

pub mod atlas;
pub mod build;
pub mod descriptor_file;

pub use atlas::TriangleAtlas;
pub use build::{BuildReport, build_all, build_file, check_file, output_path};
pub use descriptor_file::MetameshFile;
