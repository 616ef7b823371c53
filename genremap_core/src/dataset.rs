//! Dataset snapshot assembly.
//!
//! The original map kept module-level caches built at import time; here the
//! whole load-time pipeline runs inside [`Dataset::build`], which returns an
//! immutable snapshot the caller owns and shares read-only. Nothing mutates
//! a position after normalization.

use std::collections::HashMap;

use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{self, Color};
use crate::mapping::{self, map_position, Emphasis, MapConfig};
use crate::normalize::NormalizationTransform;
use crate::regions::{centroid, generate_cloud, Region};
use crate::traits::TraitVector;

/// External links for a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandcamp: Option<String>,
}

/// A raw catalog record as it appears in the bundled JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub genre: String,

    #[serde(default)]
    pub description: String,

    pub values: TraitVector,

    /// Authored positions are never trusted; the pipeline always recomputes
    /// from `values`.
    #[serde(default)]
    pub position: Option<[f64; 3]>,

    #[serde(default)]
    pub links: Option<TrackLinks>,
}

/// A catalog entry with its derived, normalized position.
#[derive(Debug, Clone)]
pub struct TrackNode {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub description: String,
    pub values: TraitVector,
    pub links: Option<TrackLinks>,

    /// Derived via the mapper and dataset normalization; never authored.
    pub position: Vector3<f64>,
}

/// Errors from the JSON record-loading surface.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid track records: {0}")]
    InvalidTracks(#[source] serde_json::Error),

    #[error("invalid region records: {0}")]
    InvalidRegions(#[source] serde_json::Error),
}

/// Immutable snapshot of the fully mapped and normalized dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    nodes: Vec<TrackNode>,
    regions: Vec<Region>,
    clouds: HashMap<String, Vec<Vector3<f64>>>,
    centroids: HashMap<String, Vector3<f64>>,
    transform: NormalizationTransform,
    config: MapConfig,
}

impl Dataset {
    /// Run the whole load-time pipeline once.
    ///
    /// 1. Map every record's trait vector to a raw position
    /// 2. Generate every region cloud (exactly once per region)
    /// 3. Fit one normalization transform over the union of all positions
    /// 4. Apply it to every node and cloud point
    /// 5. Precompute region centroids in normalized space
    pub fn build<R: Rng + ?Sized>(
        records: Vec<TrackRecord>,
        regions: Vec<Region>,
        config: MapConfig,
        rng: &mut R,
    ) -> Dataset {
        let mut nodes: Vec<TrackNode> = records
            .into_iter()
            .map(|record| {
                let position = map_position(&record.values, &config);
                TrackNode {
                    id: record.id,
                    name: record.name,
                    genre: record.genre,
                    description: record.description,
                    values: record.values,
                    links: record.links,
                    position,
                }
            })
            .collect();

        let mut clouds: HashMap<String, Vec<Vector3<f64>>> = regions
            .iter()
            .map(|region| {
                let cloud = generate_cloud(region, config.points_per_region, &config, rng);
                (region.id.clone(), cloud)
            })
            .collect();

        let transform = {
            let union = nodes
                .iter()
                .map(|n| &n.position)
                .chain(clouds.values().flatten());
            NormalizationTransform::fit(union, config.target_half_extent)
        };

        for node in &mut nodes {
            node.position = transform.apply(&node.position);
        }
        for points in clouds.values_mut() {
            transform.apply_all(points);
        }

        // centroids in normalized space, consistent with rendered geometry
        let centroids = clouds
            .iter()
            .filter_map(|(id, points)| centroid(points).map(|c| (id.clone(), c)))
            .collect();

        Dataset {
            nodes,
            regions,
            clouds,
            centroids,
            transform,
            config,
        }
    }

    /// Build a snapshot from the bundled JSON record formats.
    pub fn from_json<R: Rng + ?Sized>(
        tracks_json: &str,
        regions_json: &str,
        config: MapConfig,
        rng: &mut R,
    ) -> Result<Dataset, DataError> {
        let records: Vec<TrackRecord> =
            serde_json::from_str(tracks_json).map_err(DataError::InvalidTracks)?;
        let regions: Vec<Region> =
            serde_json::from_str(regions_json).map_err(DataError::InvalidRegions)?;

        Ok(Self::build(records, regions, config, rng))
    }

    pub fn nodes(&self) -> &[TrackNode] {
        &self.nodes
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The cached cloud for a region; never regenerated after the build.
    pub fn cloud(&self, region_id: &str) -> Option<&[Vector3<f64>]> {
        self.clouds.get(region_id).map(Vec::as_slice)
    }

    /// All cached clouds, keyed by region id.
    pub fn clouds(&self) -> impl Iterator<Item = (&str, &[Vector3<f64>])> {
        self.clouds
            .iter()
            .map(|(id, points)| (id.as_str(), points.as_slice()))
    }

    /// Normalized-space centroid of a region's cloud.
    pub fn centroid(&self, region_id: &str) -> Option<Vector3<f64>> {
        self.centroids.get(region_id).copied()
    }

    pub fn transform(&self) -> &NormalizationTransform {
        &self.transform
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Classification color for one of this dataset's nodes.
    pub fn node_color(&self, node: &TrackNode) -> Color {
        classify::node_color(&node.name, &node.genre, &self.regions)
    }

    /// Marker radius hint for one of this dataset's nodes.
    pub fn node_radius(&self, node: &TrackNode, emphasis: Emphasis) -> f64 {
        mapping::node_radius(&node.values, emphasis)
    }
}
