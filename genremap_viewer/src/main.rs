//! Genre map dataset CLI.
//!
//! Loads the track / region records, runs the mapping + normalization
//! pipeline once and reports the resulting snapshot. With the
//! `visualization` feature it can also stream the snapshot to a Rerun
//! viewer.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use genremap_core::{Dataset, Emphasis, MapConfig};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SAMPLE_TRACKS: &str = include_str!("../data/tracks.json");
const SAMPLE_REGIONS: &str = include_str!("../data/regions.json");

#[derive(Debug, Parser)]
#[command(name = "genremap-viewer", about = "Build and inspect the genre map dataset")]
struct Args {
    /// Track records (JSON); bundled sample data when omitted
    #[arg(long)]
    tracks: Option<PathBuf>,

    /// Region records (JSON); bundled sample data when omitted
    #[arg(long)]
    regions: Option<PathBuf>,

    /// RNG seed for region cloud sampling (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Samples per region cloud
    #[arg(long, default_value_t = 160)]
    points: usize,

    /// Stream the snapshot to a Rerun viewer
    #[cfg(feature = "visualization")]
    #[arg(long)]
    spawn_viewer: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let tracks_json = match &args.tracks {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_TRACKS.to_string(),
    };
    let regions_json = match &args.regions {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_REGIONS.to_string(),
    };

    let config = MapConfig {
        points_per_region: args.points,
        ..MapConfig::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dataset = Dataset::from_json(&tracks_json, &regions_json, config, &mut rng)?;

    let cloud_points: usize = dataset.clouds().map(|(_, points)| points.len()).sum();
    info!(
        nodes = dataset.nodes().len(),
        regions = dataset.regions().len(),
        cloud_points,
        "dataset built"
    );

    if let Some((min, max)) = bounding_box(&dataset) {
        info!(
            "normalized bounds: x [{:+.3}, {:+.3}]  y [{:+.3}, {:+.3}]  z [{:+.3}, {:+.3}]",
            min.x, max.x, min.y, max.y, min.z, max.z
        );
    }

    for node in dataset.nodes() {
        let color = dataset.node_color(node);
        let radius = dataset.node_radius(node, Emphasis::Default);
        println!(
            "{:<24} {:<28} ({:+.3}, {:+.3}, {:+.3})  {}  r={:.3}",
            node.name,
            node.genre,
            node.position.x,
            node.position.y,
            node.position.z,
            color.hex(),
            radius
        );
    }

    for region in dataset.regions() {
        if let Some(c) = dataset.centroid(&region.id) {
            println!(
                "{:<24} centroid ({:+.3}, {:+.3}, {:+.3})",
                region.name, c.x, c.y, c.z
            );
        }
    }

    #[cfg(feature = "visualization")]
    if args.spawn_viewer {
        let viz = genremap_core::viz::RerunVisualizer::new("genremap")?;
        viz.log_boundary()?;
        viz.log_dataset(&dataset)?;
        info!("snapshot streamed to rerun");
    }

    Ok(())
}

/// Axis-aligned bounds over every normalized node and cloud position.
fn bounding_box(dataset: &Dataset) -> Option<(Vector3<f64>, Vector3<f64>)> {
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);
    let mut seen = false;

    let nodes = dataset.nodes().iter().map(|n| n.position);
    let clouds = dataset
        .clouds()
        .flat_map(|(_, points)| points.iter().copied().collect::<Vec<_>>());

    for p in nodes.chain(clouds) {
        seen = true;
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }

    seen.then_some((min, max))
}
