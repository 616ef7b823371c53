//! Genre regions and their representative point clouds.
//!
//! A region is a named bounding box in trait space, not an authored set of
//! positions. Its visual footprint is a point cloud: trait vectors sampled
//! uniformly from the bounds and pushed through the position mapper.

use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::classify::Color;
use crate::mapping::{map_position, MapConfig};
use crate::traits::TraitBounds;

/// A named bounding box in trait space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub bounds: TraitBounds,
}

/// Neutral fallback for region ids without an assigned color.
pub const DEFAULT_REGION_COLOR: Color = Color::rgb(0x88, 0x88, 0xFF);

/// Fixed cloud colors keyed by region id.
pub fn known_region_color(id: &str) -> Option<Color> {
    let color = match id {
        "genre_ambient" => Color::rgb(0x77, 0x32, 0xD9), // Ambient / Downtempo
        "genre_synthwave" => Color::rgb(0xFF, 0x6A, 0xD5),
        "genre_house" => Color::rgb(0x66, 0xFF, 0x66),
        "genre_liquid_dnb" => Color::rgb(0x00, 0xE5, 0xFF),
        "genre_experimental_glitch_idm" => Color::rgb(0xFF, 0xB3, 0x47),
        "genre_hardcore_gabber" => Color::rgb(0xFF, 0x3B, 0x3B),
        "genre_electro" => Color::rgb(0xFF, 0xD9, 0x3B),
        "genre_industrial_ebm" => Color::rgb(0xFF, 0x6A, 0x00),
        "genre_breakbeat" => Color::rgb(0x00, 0xFF, 0x9D),
        "genre_dubstep" => Color::rgb(0x9D, 0x4B, 0xFF),
        "genre_dnb_jungle" => Color::rgb(0x00, 0xFF, 0x66),
        "genre_trance" => Color::rgb(0x00, 0xB3, 0xFF),
        "genre_techno" => Color::rgb(0xFF, 0x00, 0x80),
        _ => return None,
    };
    Some(color)
}

/// Cloud color for a region id, falling back to the neutral default.
pub fn region_color(id: &str) -> Color {
    known_region_color(id).unwrap_or(DEFAULT_REGION_COLOR)
}

/// Sample `count` trait vectors uniformly inside the region's bounds and
/// map each through the position mapper.
///
/// Called once per region per dataset build; the result is cached in the
/// dataset snapshot. Resampling per frame would break visual stability and
/// spatial-click correspondence.
pub fn generate_cloud<R: Rng + ?Sized>(
    region: &Region,
    count: usize,
    config: &MapConfig,
    rng: &mut R,
) -> Vec<Vector3<f64>> {
    (0..count)
        .map(|_| map_position(&region.bounds.sample(rng), config))
        .collect()
}

/// Arithmetic mean of a cloud; `None` when the cloud is empty.
pub fn centroid(points: &[Vector3<f64>]) -> Option<Vector3<f64>> {
    if points.is_empty() {
        return None;
    }

    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f64>, p| acc + p);
    Some(sum / points.len() as f64)
}
