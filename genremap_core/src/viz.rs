//! Visualization module for the genre map using Rerun.io
//!
//! Streams the core's outputs to a Rerun viewer:
//! - the fixed boundary polytope (hull edges, axis lines, vertex markers)
//! - normalized region point clouds in their assigned colors
//! - normalized track nodes with classification colors and radius hints
//!
//! Enable with the `visualization` feature flag.

use nalgebra::Vector3;
use rerun::{RecordingStream, RecordingStreamBuilder};

use crate::dataset::Dataset;
use crate::mapping::Emphasis;
use crate::polytope::{vertex_base_color, vertex_position, AXIS_LINES, BOUNDARY_VERTICES, HULL_EDGES};
use crate::regions::region_color;

fn to_f32(p: &Vector3<f64>) -> [f32; 3] {
    [p.x as f32, p.y as f32, p.z as f32]
}

/// Rerun-based visualizer for the genre map.
pub struct RerunVisualizer {
    rec: RecordingStream,
}

impl RerunVisualizer {
    /// Create a new visualizer that spawns the Rerun viewer.
    pub fn new(app_id: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let rec = RecordingStreamBuilder::new(app_id).spawn()?;

        rec.log_static("map", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

        Ok(Self { rec })
    }

    /// Create a visualizer that saves to a file (for web sharing).
    pub fn new_to_file(app_id: &str, path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let rec = RecordingStreamBuilder::new(app_id).save(path)?;

        rec.log_static("map", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

        Ok(Self { rec })
    }

    /// Log the fixed boundary polytope (un-normalized reference geometry).
    pub fn log_boundary(&self) -> Result<(), Box<dyn std::error::Error>> {
        let hull: Vec<[[f32; 3]; 2]> = HULL_EDGES
            .iter()
            .filter_map(|(a, b)| {
                let pa = vertex_position(a)?;
                let pb = vertex_position(b)?;
                Some([to_f32(&pa), to_f32(&pb)])
            })
            .collect();

        self.rec.log(
            "map/boundary/hull",
            &rerun::LineStrips3D::new(hull).with_colors([[0x33, 0x44, 0x44, 0xCC]]),
        )?;

        let axes: Vec<[[f32; 3]; 2]> = AXIS_LINES
            .iter()
            .filter_map(|(a, b)| {
                let pa = vertex_position(a)?;
                let pb = vertex_position(b)?;
                Some([to_f32(&pa), to_f32(&pb)])
            })
            .collect();

        self.rec.log(
            "map/boundary/axes",
            &rerun::LineStrips3D::new(axes).with_colors([[0x77, 0x77, 0x77, 0xFF]]),
        )?;

        let positions: Vec<[f32; 3]> = BOUNDARY_VERTICES
            .iter()
            .map(|v| {
                let p = Vector3::from(v.position);
                to_f32(&p)
            })
            .collect();
        let colors: Vec<[u8; 4]> = BOUNDARY_VERTICES
            .iter()
            .map(|v| {
                let c = vertex_base_color(v.id).0;
                [c[0], c[1], c[2], 0xFF]
            })
            .collect();
        let labels: Vec<String> = BOUNDARY_VERTICES.iter().map(|v| v.label.to_string()).collect();

        self.rec.log(
            "map/boundary/vertices",
            &rerun::Points3D::new(positions)
                .with_colors(colors)
                .with_radii([0.06])
                .with_labels(labels),
        )?;

        Ok(())
    }

    /// Log a normalized dataset snapshot: region clouds and track nodes.
    pub fn log_dataset(&self, dataset: &Dataset) -> Result<(), Box<dyn std::error::Error>> {
        for (region_id, points) in dataset.clouds() {
            let c = region_color(region_id).0;
            let positions: Vec<[f32; 3]> = points.iter().map(to_f32).collect();

            self.rec.log(
                format!("map/regions/{}", region_id),
                &rerun::Points3D::new(positions)
                    .with_colors([[c[0], c[1], c[2], 0x40]])
                    .with_radii([0.035]),
            )?;
        }

        let positions: Vec<[f32; 3]> = dataset
            .nodes()
            .iter()
            .map(|n| to_f32(&n.position))
            .collect();
        let colors: Vec<[u8; 4]> = dataset
            .nodes()
            .iter()
            .map(|n| {
                let c = dataset.node_color(n).0;
                [c[0], c[1], c[2], 0xFF]
            })
            .collect();
        let radii: Vec<f32> = dataset
            .nodes()
            .iter()
            .map(|n| dataset.node_radius(n, Emphasis::Default) as f32)
            .collect();
        let labels: Vec<String> = dataset.nodes().iter().map(|n| n.name.clone()).collect();

        self.rec.log(
            "map/tracks",
            &rerun::Points3D::new(positions)
                .with_colors(colors)
                .with_radii(radii)
                .with_labels(labels),
        )?;

        Ok(())
    }
}
