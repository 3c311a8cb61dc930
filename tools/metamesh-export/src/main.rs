//! metamesh-export - procedural mesh export tool
//!
//! Builds `.metamesh` shape descriptor files into Wavefront OBJ meshes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use metamesh::MeshBuildOptions;
use std::path::PathBuf;

use metamesh_export::build;

#[derive(Parser)]
#[command(name = "metamesh-export")]
#[command(about = "metamesh procedural mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Passes forced on for every input, in addition to each file's [options]
#[derive(Args)]
struct PassFlags {
    /// Recompute area-weighted vertex normals
    #[arg(long)]
    recalculate_normals: bool,

    /// Compute tangents from the primary UVs
    #[arg(long)]
    recalculate_tangents: bool,

    /// Pack secondary (lightmap) UVs
    #[arg(long)]
    lightmap_uvs: bool,
}

impl From<&PassFlags> for MeshBuildOptions {
    fn from(flags: &PassFlags) -> Self {
        MeshBuildOptions {
            recalculate_normals: flags.recalculate_normals,
            recalculate_tangents: flags.recalculate_tangents,
            generate_lightmap_uvs: flags.lightmap_uvs,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build descriptor files into OBJ meshes
    Build {
        /// Input .metamesh files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default: next to each input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: PassFlags,
    },

    /// Validate descriptor files without writing output
    Check {
        /// Input .metamesh files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            inputs,
            output,
            flags,
        } => {
            let reports = build::build_all(&inputs, output.as_deref(), &(&flags).into())?;
            tracing::info!("Built {} mesh(es)", reports.len());
        }

        Commands::Check { inputs } => {
            for input in &inputs {
                let report = build::check_file(input, &MeshBuildOptions::default())?;
                tracing::info!(
                    "{}: {} ({} verts, {} tris)",
                    input.display(),
                    report.shape,
                    report.vertices,
                    report.triangles
                );
            }
            tracing::info!("All descriptors are valid!");
        }
    }

    Ok(())
}
