//! Node color classification.
//!
//! Two-tier heuristic inherited from the original map: first a
//! case-insensitive substring match of the node's name / genre text against
//! the region display names (declaration order, first match wins), then a
//! coarse keyword-family bucket over the genre text. The keyword lists and
//! their priority order are behavioral compatibility requirements, not
//! tunables. Kept behind this one module so a structured category field can
//! replace it later without touching the mapper or normalizer.

use serde::{Deserialize, Serialize};

use crate::regions::{known_region_color, Region};

/// sRGB color handed to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b])
    }

    /// `#RRGGBB` form for logs and the detail panel.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

/// Coarse genre families used when no region name matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    HighEnergy,
    Groove,
    Dreamy,
    Other,
}

/// Bucket a genre text into a family. Buckets are checked in a fixed
/// priority order; the first hit wins.
pub fn genre_family(genre: &str) -> Family {
    let g = genre.to_lowercase();

    if g.contains("drum") || g.contains("dubstep") || g.contains("hard") {
        return Family::HighEnergy;
    }
    if g.contains("house") || g.contains("garage") {
        return Family::Groove;
    }
    if g.contains("ambient") || g.contains("lo-fi") || g.contains("indie") {
        return Family::Dreamy;
    }

    Family::Other
}

/// Fixed color per family.
pub fn family_color(family: Family) -> Color {
    match family {
        Family::HighEnergy => Color::rgb(0x00, 0xFF, 0x00), // main neon green
        Family::Groove => Color::rgb(0x66, 0xFF, 0x66),     // softer green
        Family::Dreamy => Color::rgb(0x77, 0x32, 0xD9),     // station purple
        Family::Other => Color::rgb(0xFF, 0xFF, 0xFF),
    }
}

/// First region (in declaration order) whose display name appears in the
/// node's name or genre text. Regions without an assigned color are
/// skipped, not treated as matches.
pub fn region_match_color(name: &str, genre: &str, regions: &[Region]) -> Option<Color> {
    let name = name.to_lowercase();
    let genre = genre.to_lowercase();

    for region in regions {
        let region_name = region.name.to_lowercase();
        if name.contains(&region_name) || genre.contains(&region_name) {
            if let Some(color) = known_region_color(&region.id) {
                return Some(color);
            }
        }
    }

    None
}

/// Classification color for a node: region match first, family bucket as
/// the fallback.
pub fn node_color(name: &str, genre: &str, regions: &[Region]) -> Color {
    region_match_color(name, genre, regions)
        .unwrap_or_else(|| family_color(genre_family(genre)))
}
