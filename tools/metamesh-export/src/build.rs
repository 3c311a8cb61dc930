//! Build driver: descriptor file → generated mesh → OBJ file

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use hashbrown::HashSet;
use metamesh::{
    MeshBuffer, MeshBuildOptions, SecondaryUvGenerator, ShapeKind, generate_with, write_obj,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::atlas::TriangleAtlas;
use crate::descriptor_file::{DESCRIPTOR_EXTENSION, MetameshFile};

/// Summary of one built (or checked) descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub input: PathBuf,
    /// Written OBJ file, `None` for a check-only run
    pub output: Option<PathBuf>,
    pub shape: ShapeKind,
    pub vertices: usize,
    pub triangles: usize,
}

/// OBJ path for `input`: `<stem>.obj` next to it, or inside `output_dir`
pub fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let file_name = input.with_extension("obj");
    match (output_dir, file_name.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => file_name,
    }
}

/// Combine file options with command-line flags; a pass runs if either asks for it
fn merge_options(file: MeshBuildOptions, flags: &MeshBuildOptions) -> MeshBuildOptions {
    MeshBuildOptions {
        recalculate_normals: file.recalculate_normals || flags.recalculate_normals,
        recalculate_tangents: file.recalculate_tangents || flags.recalculate_tangents,
        generate_lightmap_uvs: file.generate_lightmap_uvs || flags.generate_lightmap_uvs,
    }
}

/// Load a descriptor and generate its mesh
fn generate_file(input: &Path, flags: &MeshBuildOptions) -> Result<(ShapeKind, MeshBuffer)> {
    if input.extension().and_then(|e| e.to_str()) != Some(DESCRIPTOR_EXTENSION) {
        warn!(
            "{}: expected a .{DESCRIPTOR_EXTENSION} file, reading it anyway",
            input.display()
        );
    }
    let file = MetameshFile::load(input)?;
    let options = merge_options(file.options, flags);
    let kind = file.shape.kind();
    debug!("{}: {kind} with {options:?}", input.display());

    let atlas = TriangleAtlas::default();
    let packer: &dyn SecondaryUvGenerator = &atlas;
    let mesh = generate_with(file.shape, &options, Some(packer))
        .with_context(|| format!("Failed to generate {kind} from {}", input.display()))?;
    Ok((kind, mesh))
}

/// Build one descriptor file into an OBJ
pub fn build_file(
    input: &Path,
    output_dir: Option<&Path>,
    flags: &MeshBuildOptions,
) -> Result<BuildReport> {
    let (shape, mesh) = generate_file(input, flags)?;

    let output = output_path(input, output_dir);
    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(shape.name());
    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    write_obj(&mesh, name, BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "{} -> {} ({} verts, {} tris)",
        input.display(),
        output.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(BuildReport {
        input: input.to_path_buf(),
        output: Some(output),
        shape,
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
    })
}

/// Parse and generate a descriptor file without writing anything
pub fn check_file(input: &Path, flags: &MeshBuildOptions) -> Result<BuildReport> {
    let (shape, mesh) = generate_file(input, flags)?;
    Ok(BuildReport {
        input: input.to_path_buf(),
        output: None,
        shape,
        vertices: mesh.vertex_count(),
        triangles: mesh.triangle_count(),
    })
}

/// Build every input in parallel, failing on the first error
pub fn build_all(
    inputs: &[PathBuf],
    output_dir: Option<&Path>,
    flags: &MeshBuildOptions,
) -> Result<Vec<BuildReport>> {
    let mut outputs = HashSet::with_capacity(inputs.len());
    for input in inputs {
        let output = output_path(input, output_dir);
        if !outputs.insert(output.clone()) {
            bail!(
                "{} would overwrite {} written by another input",
                input.display(),
                output.display()
            );
        }
    }

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    inputs
        .par_iter()
        .map(|input| build_file(input, output_dir, flags))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let input = Path::new("shapes/teapot.metamesh");
        assert_eq!(output_path(input, None), PathBuf::from("shapes/teapot.obj"));
        assert_eq!(
            output_path(input, Some(Path::new("out"))),
            PathBuf::from("out/teapot.obj")
        );
    }

    #[test]
    fn test_duplicate_outputs_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let mut inputs = Vec::new();
        for sub in ["a", "b"] {
            let sub_dir = dir.path().join(sub);
            std::fs::create_dir(&sub_dir).unwrap();
            let input = sub_dir.join("shape.metamesh");
            std::fs::write(&input, "[shape]\ntype = \"plane\"\n").unwrap();
            inputs.push(input);
        }

        let err = build_all(&inputs, Some(&out), &MeshBuildOptions::default()).unwrap_err();
        assert!(err.to_string().contains("shape.obj"), "{err}");
        assert!(!out.join("shape.obj").exists());

        // Without -o each OBJ lands next to its own input
        let reports = build_all(&inputs, None, &MeshBuildOptions::default()).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(inputs.iter().all(|i| i.with_extension("obj").exists()));
    }

    #[test]
    fn test_flags_or_with_file_options() {
        let file = MeshBuildOptions {
            recalculate_normals: true,
            ..MeshBuildOptions::default()
        };
        let flags = MeshBuildOptions {
            generate_lightmap_uvs: true,
            ..MeshBuildOptions::default()
        };
        let merged = merge_options(file, &flags);
        assert!(merged.recalculate_normals);
        assert!(!merged.recalculate_tangents);
        assert!(merged.generate_lightmap_uvs);
    }
}
