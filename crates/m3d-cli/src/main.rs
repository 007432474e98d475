//! m3d - demo renderers for the m3d math library
//!
//! Ray traces a sphere scene, draws a projected wireframe as SVG and
//! projects individual points through a camera.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

mod commands;
mod config;
mod svg;

use config::SceneConfig;

#[derive(Parser)]
#[command(name = "m3d")]
#[command(author, version, about = "Demo renderers for the m3d math library")]
#[command(long_about = "
Small renderers exercising m3d vectors, matrices and projections.

Examples:
  m3d raytrace -o spheres.png               # Default sphere scene
  m3d raytrace -o spheres.bmp -W 640 -H 480 # Larger image, BMP output
  m3d wireframe -o cube.svg                 # Cube, axes and frustum
  m3d --config scene.yaml wireframe -o cube.svg
  m3d project 0,0,0 1,1,1                   # Points to screen space
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Scene description (YAML); built-in scene when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ray trace the sphere scene into a PNG or BMP image
    #[command(visible_alias = "rt")]
    Raytrace(RaytraceArgs),

    /// Project the cube, axes and frustum into an SVG line drawing
    #[command(visible_alias = "wf")]
    Wireframe(WireframeArgs),

    /// Print screen coordinates of points seen by the wireframe camera
    #[command(visible_alias = "p")]
    Project(ProjectArgs),
}

#[derive(Args)]
struct RaytraceArgs {
    /// Output image (format from extension: .png or .bmp)
    #[arg(short, long)]
    output: PathBuf,

    /// Image width override
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Image height override
    #[arg(short = 'H', long)]
    height: Option<u32>,
}

#[derive(Args)]
struct WireframeArgs {
    /// Output SVG file
    #[arg(short, long)]
    output: PathBuf,

    /// Vertical field of view in degrees (overrides the scene)
    #[arg(long)]
    fov: Option<f32>,

    /// Repeat the cube on an NxN grid
    #[arg(short, long)]
    grid: Option<u32>,
}

#[derive(Args)]
struct ProjectArgs {
    /// Points as x,y,z
    #[arg(required = true, allow_hyphen_values = true)]
    points: Vec<String>,

    /// Print normalized device coordinates instead of screen pixels
    #[arg(long)]
    ndc: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "m3d=info",
        2 => "m3d=debug",
        _ => "m3d=trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
        debug!(threads = cli.threads, "configured thread pool");
    }

    let scene = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    match cli.command {
        Commands::Raytrace(args) => commands::raytrace::run(args, &scene.raytrace),
        Commands::Wireframe(args) => commands::wireframe::run(args, &scene.wireframe),
        Commands::Project(args) => commands::project::run(args, &scene.wireframe),
    }
}
