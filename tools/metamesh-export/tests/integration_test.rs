//! Integration tests for metamesh-export
//!
//! Tests the full pipeline: write descriptor -> build -> verify OBJ output

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use metamesh::{MeshBuildOptions, ShapeDescriptor, TeapotParams, generate_with};
use metamesh_export::TriangleAtlas;
use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_metamesh-export"))
        .args(args)
        .output()
        .expect("Failed to run metamesh-export")
}

fn write_descriptor(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write descriptor");
    path
}

fn count_lines(obj: &str, prefix: &str) -> usize {
    obj.lines().filter(|l| l.starts_with(prefix)).count()
}

/// Test descriptor -> OBJ, comparing against the library directly
#[test]
fn test_build_teapot_matches_library() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_descriptor(
        dir.path(),
        "teapot.metamesh",
        "[shape]\ntype = \"teapot\"\nsubdivision = 4\n",
    );

    let output = run(&["build", input.to_str().unwrap()]);
    assert!(output.status.success(), "build failed: {output:?}");

    let obj_path = dir.path().join("teapot.obj");
    let obj = std::fs::read_to_string(&obj_path).expect("OBJ file should exist");
    assert!(obj.contains("o teapot\n"));
    assert_eq!(count_lines(&obj, "v "), 512);
    assert_eq!(count_lines(&obj, "vn "), 512);
    assert_eq!(count_lines(&obj, "f "), 576);
    assert!(obj.contains("\nv 1.4 2.4 0\n"));
}

/// Test that command-line flags apply and the output directory is honored
#[test]
fn test_build_with_lightmap_flag_into_output_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out_dir = dir.path().join("out");
    let input = write_descriptor(
        dir.path(),
        "pot.metamesh",
        "[shape]\ntype = \"teapot\"\nsubdivision = 3\n",
    );

    let output = run(&[
        "build",
        input.to_str().unwrap(),
        "-o",
        out_dir.to_str().unwrap(),
        "--lightmap-uvs",
    ]);
    assert!(output.status.success(), "build failed: {output:?}");

    let obj = std::fs::read_to_string(out_dir.join("pot.obj")).expect("OBJ file should exist");

    // The atlas splits every triangle into its own vertices
    let options = MeshBuildOptions {
        generate_lightmap_uvs: true,
        ..MeshBuildOptions::default()
    };
    let expected = generate_with(
        ShapeDescriptor::Teapot(TeapotParams { subdivision: 3 }),
        &options,
        Some(&TriangleAtlas::default()),
    )
    .unwrap();
    assert_eq!(expected.vertex_count(), expected.triangle_count() * 3);
    assert_eq!(count_lines(&obj, "v "), expected.vertex_count());
    assert_eq!(count_lines(&obj, "f "), expected.triangle_count());
}

/// Test building several files at once
#[test]
fn test_build_multiple_inputs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let shapes = [
        ("plane.metamesh", "[shape]\ntype = \"plane\"\ncolumns = 4\nrows = 4\n"),
        ("ball.metamesh", "[shape]\ntype = \"icosphere\"\nsubdivision = 1\n"),
        ("disc.metamesh", "[shape]\ntype = \"disc\"\ndouble_sided = true\n"),
    ];
    let inputs: Vec<PathBuf> = shapes
        .iter()
        .map(|(name, content)| write_descriptor(dir.path(), name, content))
        .collect();

    let mut args = vec!["build"];
    args.extend(inputs.iter().map(|p| p.to_str().unwrap()));
    let output = run(&args);
    assert!(output.status.success(), "build failed: {output:?}");

    for name in ["plane.obj", "ball.obj", "disc.obj"] {
        assert!(dir.path().join(name).exists(), "{name} should exist");
    }
    let ball = std::fs::read_to_string(dir.path().join("ball.obj")).unwrap();
    assert_eq!(count_lines(&ball, "v "), 42);
    assert_eq!(count_lines(&ball, "f "), 80);
}

/// Test that invalid parameters fail the check without writing output
#[test]
fn test_check_rejects_invalid_parameters() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = write_descriptor(
        dir.path(),
        "bad.metamesh",
        "[shape]\ntype = \"teapot\"\nsubdivision = 1\n",
    );

    let output = run(&["check", input.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("subdivision"), "stderr: {stderr}");
    assert!(!dir.path().join("bad.obj").exists());
}

/// Test that the shipped demo descriptors are valid
#[test]
fn test_demo_descriptors_check() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let mut inputs: Vec<String> = std::fs::read_dir(&demos)
        .expect("demos directory should exist")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|e| e == "metamesh"))
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    inputs.sort();
    assert!(!inputs.is_empty());

    let mut args = vec!["check"];
    args.extend(inputs.iter().map(String::as_str));
    let output = run(&args);
    assert!(output.status.success(), "check failed: {output:?}");
}
