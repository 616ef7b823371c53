//! Boundary polytope reference data.
//!
//! The map's reference solid is a cuboctahedron-like polytope whose 12
//! vertices are the positive / negative extremes of the six trait axes.
//! This module is pure data: the mapper interpolates against the axis
//! endpoint pairs, and the rendering layer draws the wireframe from the
//! edge lists. The tables are never normalized.

use nalgebra::Vector3;

use crate::classify::Color;

/// Axis endpoint pairs `(positive end, negative end)`, in trait order:
/// speed, complexity, harmonic quality, harmonic density, temperature,
/// synthetic.
pub const AXIS_ENDPOINTS: [([f64; 3], [f64; 3]); 6] = [
    ([2.0, 2.0, 0.0], [-2.0, -2.0, 0.0]),  // tempo_speed: -2 slow ... +2 fast
    ([2.0, -2.0, 0.0], [-2.0, 2.0, 0.0]),  // tempo_complexity: -2 simple ... +2 complex
    ([2.0, 0.0, 2.0], [-2.0, 0.0, -2.0]),  // harmonic_quality: -2 dissonant ... +2 consonant
    ([-2.0, 0.0, 2.0], [2.0, 0.0, -2.0]),  // harmonic_density: -2 simple ... +2 dense
    ([0.0, 2.0, 2.0], [0.0, -2.0, -2.0]),  // sonic_temperature: -2 cold ... +2 warm
    ([0.0, -2.0, 2.0], [0.0, 2.0, -2.0]),  // sonic_synthetic: -2 organic ... +2 synthetic
];

/// One vertex of the boundary polytope.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryVertex {
    pub id: &'static str,
    pub label: &'static str,
    pub position: [f64; 3],
}

/// The 12 boundary vertices, two per trait axis.
pub const BOUNDARY_VERTICES: [BoundaryVertex; 12] = [
    BoundaryVertex { id: "v1", label: "V1", position: [2.0, 2.0, 0.0] },
    BoundaryVertex { id: "v2", label: "V2", position: [-2.0, -2.0, 0.0] },
    BoundaryVertex { id: "v3", label: "V3", position: [2.0, -2.0, 0.0] },
    BoundaryVertex { id: "v4", label: "V4", position: [-2.0, 2.0, 0.0] },
    BoundaryVertex { id: "v5", label: "V5", position: [2.0, 0.0, 2.0] },
    BoundaryVertex { id: "v6", label: "V6", position: [-2.0, 0.0, -2.0] },
    BoundaryVertex { id: "v7", label: "V7", position: [-2.0, 0.0, 2.0] },
    BoundaryVertex { id: "v8", label: "V8", position: [2.0, 0.0, -2.0] },
    BoundaryVertex { id: "v9", label: "V9", position: [0.0, 2.0, 2.0] },
    BoundaryVertex { id: "v10", label: "V10", position: [0.0, -2.0, -2.0] },
    BoundaryVertex { id: "v11", label: "V11", position: [0.0, 2.0, -2.0] },
    BoundaryVertex { id: "v12", label: "V12", position: [0.0, -2.0, 2.0] },
];

/// The six trait axes, one line per endpoint pair.
pub const AXIS_LINES: [(&str, &str); 6] = [
    ("v1", "v2"),
    ("v3", "v4"),
    ("v5", "v6"),
    ("v7", "v8"),
    ("v9", "v10"),
    ("v11", "v12"),
];

/// Vertex pairs at hull-edge distance, for the wireframe.
pub const HULL_EDGES: [(&str, &str); 24] = [
    ("v1", "v5"),
    ("v1", "v8"),
    ("v1", "v9"),
    ("v1", "v11"),
    ("v2", "v6"),
    ("v2", "v7"),
    ("v2", "v10"),
    ("v2", "v12"),
    ("v3", "v5"),
    ("v3", "v8"),
    ("v3", "v10"),
    ("v3", "v12"),
    ("v4", "v6"),
    ("v4", "v7"),
    ("v4", "v9"),
    ("v4", "v11"),
    ("v5", "v9"),
    ("v5", "v12"),
    ("v6", "v10"),
    ("v6", "v11"),
    ("v7", "v9"),
    ("v7", "v12"),
    ("v8", "v10"),
    ("v8", "v11"),
];

/// Position of a boundary vertex by id.
pub fn vertex_position(id: &str) -> Option<Vector3<f64>> {
    BOUNDARY_VERTICES
        .iter()
        .find(|v| v.id == id)
        .map(|v| Vector3::from(v.position))
}

// ============================================================================
// VERTEX METADATA (detail-panel copy)
// ============================================================================

/// The three axis families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisGroup {
    Tempo,
    Tonality,
    Timbre,
}

/// Which end of its axis a vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRole {
    Positive,
    Negative,
}

/// Descriptive metadata for one boundary vertex.
#[derive(Debug, Clone, Copy)]
pub struct VertexInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub group: AxisGroup,
    pub dimension: &'static str,
    pub role: AxisRole,
    pub axis_label: &'static str,
    pub range_hint: &'static str,
    pub opposite_id: &'static str,
    pub description: &'static str,
    pub example_genres: &'static str,
}

/// Metadata for all 12 vertices, in vertex-id order.
pub const VERTEX_INFO: [VertexInfo; 12] = [
    // TEMPO - Rhythm Speed
    VertexInfo {
        id: "v1",
        title: "Fast Tempo",
        group: AxisGroup::Tempo,
        dimension: "Rhythm Speed",
        role: AxisRole::Positive,
        axis_label: "+2 FAST",
        range_hint: "-2 SLOW ... +2 FAST",
        opposite_id: "v2",
        description: "Represents the fastest music in the database.",
        example_genres: "Drum & Bass, Hardcore, Speedcore, Gabber",
    },
    VertexInfo {
        id: "v2",
        title: "Slow Tempo",
        group: AxisGroup::Tempo,
        dimension: "Rhythm Speed",
        role: AxisRole::Negative,
        axis_label: "-2 SLOW",
        range_hint: "-2 SLOW ... +2 FAST",
        opposite_id: "v1",
        description: "Represents the slowest music in the database.",
        example_genres: "Chill, Downtempo, Ambient, Doom Jazz",
    },
    // TEMPO - Rhythm Complexity
    VertexInfo {
        id: "v3",
        title: "Complex Rhythm",
        group: AxisGroup::Tempo,
        dimension: "Rhythm Complexity",
        role: AxisRole::Positive,
        axis_label: "+2 COMPLEX",
        range_hint: "-2 SIMPLE ... +2 COMPLEX",
        opposite_id: "v4",
        description: "Represents the most rhythmically complex music in the database.",
        example_genres: "Breakcore, Jazz Fusion, IDM",
    },
    VertexInfo {
        id: "v4",
        title: "Simple Rhythm",
        group: AxisGroup::Tempo,
        dimension: "Rhythm Complexity",
        role: AxisRole::Negative,
        axis_label: "-2 SIMPLE",
        range_hint: "-2 SIMPLE ... +2 COMPLEX",
        opposite_id: "v3",
        description: "Represents the most rhythmically simple music in the database.",
        example_genres: "House, Techno, Trap",
    },
    // TONALITY - Harmonic Quality
    VertexInfo {
        id: "v5",
        title: "Consonant Harmony",
        group: AxisGroup::Tonality,
        dimension: "Harmonic Quality",
        role: AxisRole::Positive,
        axis_label: "+2 CONSONANT",
        range_hint: "-2 DISSONANT ... +2 CONSONANT",
        opposite_id: "v6",
        description: "Represents the most harmonic, consonant, melodic music in the database.",
        example_genres: "Synthwave, Trance, Deep House, Future Bass",
    },
    VertexInfo {
        id: "v6",
        title: "Dissonant Harmony",
        group: AxisGroup::Tonality,
        dimension: "Harmonic Quality",
        role: AxisRole::Negative,
        axis_label: "-2 DISSONANT",
        range_hint: "-2 DISSONANT ... +2 CONSONANT",
        opposite_id: "v5",
        description: "Represents the most dissonant, atonal music in the database.",
        example_genres: "Noise, Industrial, Dark Ambient",
    },
    // TONALITY - Harmonic Density
    VertexInfo {
        id: "v7",
        title: "Dense Harmony",
        group: AxisGroup::Tonality,
        dimension: "Harmonic Density",
        role: AxisRole::Positive,
        axis_label: "+2 DENSE",
        range_hint: "-2 SIMPLE ... +2 DENSE",
        opposite_id: "v8",
        description: "Represents the most harmonically dense music in the database.",
        example_genres: "Jazz Fusion, Progressive House, Orchestral Breakcore",
    },
    VertexInfo {
        id: "v8",
        title: "Simple Harmony",
        group: AxisGroup::Tonality,
        dimension: "Harmonic Density",
        role: AxisRole::Negative,
        axis_label: "-2 SIMPLE",
        range_hint: "-2 SIMPLE ... +2 DENSE",
        opposite_id: "v7",
        description: "Represents the most harmonically simple, minimal music in the database.",
        example_genres: "Minimal Techno, Drone, Dub Techno",
    },
    // TIMBRE - Sonic Temperature
    VertexInfo {
        id: "v9",
        title: "Warm Timbre",
        group: AxisGroup::Timbre,
        dimension: "Sonic Temperature",
        role: AxisRole::Positive,
        axis_label: "+2 WARM",
        range_hint: "-2 COLD ... +2 WARM",
        opposite_id: "v10",
        description: "Represents the warmest, lo-fi-leaning music in the database.",
        example_genres: "Lo-Fi Hip-Hop, Vaporwave, Dream Pop",
    },
    VertexInfo {
        id: "v10",
        title: "Cold Timbre",
        group: AxisGroup::Timbre,
        dimension: "Sonic Temperature",
        role: AxisRole::Negative,
        axis_label: "-2 COLD",
        range_hint: "-2 COLD ... +2 WARM",
        opposite_id: "v9",
        description: "Represents the coldest, crispest production in the database.",
        example_genres: "Techno, Glitch, Neurofunk, Industrial",
    },
    // TIMBRE - Synthetic vs Organic
    VertexInfo {
        id: "v11",
        title: "Organic Timbre",
        group: AxisGroup::Timbre,
        dimension: "Sonic Synthetic Value",
        role: AxisRole::Negative,
        axis_label: "-2 ORGANIC",
        range_hint: "-2 ORGANIC ... +2 SYNTHETIC",
        opposite_id: "v12",
        description: "Represents the most organic / acoustic-leaning music in the database.",
        example_genres: "Folk, Jazz, Lo-Fi, Deep House",
    },
    VertexInfo {
        id: "v12",
        title: "Synthetic Timbre",
        group: AxisGroup::Timbre,
        dimension: "Sonic Synthetic Value",
        role: AxisRole::Positive,
        axis_label: "+2 SYNTHETIC",
        range_hint: "-2 ORGANIC ... +2 SYNTHETIC",
        opposite_id: "v11",
        description: "Represents the most synthetic / digital music in the database.",
        example_genres: "Trance, Techno, Industrial, Hyperpop",
    },
];

/// Metadata for a boundary vertex by id.
pub fn vertex_info(id: &str) -> Option<&'static VertexInfo> {
    VERTEX_INFO.iter().find(|info| info.id == id)
}

/// Marker colors per axis family.
pub fn axis_group_color(group: AxisGroup) -> Color {
    match group {
        AxisGroup::Tempo => Color::rgb(0xFF, 0xB3, 0x47),    // warm amber
        AxisGroup::Tonality => Color::rgb(0x77, 0x32, 0xD9), // station purple
        AxisGroup::Timbre => Color::rgb(0x00, 0x9D, 0xFF),   // cyan / blue
    }
}

/// Base color for a vertex marker; unknown ids fall back to the timbre blue.
pub fn vertex_base_color(id: &str) -> Color {
    vertex_info(id)
        .map(|info| axis_group_color(info.group))
        .unwrap_or(Color::rgb(0x00, 0x9D, 0xFF))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn twelve_vertices_with_unique_ids() {
        let ids: HashSet<&str> = BOUNDARY_VERTICES.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(VERTEX_INFO.len(), 12);
    }

    #[test]
    fn opposites_are_an_involution_with_negated_positions() {
        for info in &VERTEX_INFO {
            let opposite = vertex_info(info.opposite_id).unwrap();
            assert_eq!(opposite.opposite_id, info.id);

            let p = vertex_position(info.id).unwrap();
            let q = vertex_position(info.opposite_id).unwrap();
            assert_relative_eq!((p + q).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn axis_lines_connect_each_endpoint_pair() {
        for (line, (pos_end, neg_end)) in AXIS_LINES.iter().zip(AXIS_ENDPOINTS.iter()) {
            let a = vertex_position(line.0).unwrap();
            let b = vertex_position(line.1).unwrap();
            let pos = Vector3::from(*pos_end);
            let neg = Vector3::from(*neg_end);
            // each line's endpoints are the axis pair, in either order
            assert!((a == pos && b == neg) || (a == neg && b == pos));
        }
    }

    #[test]
    fn hull_edges_share_one_uniform_length() {
        assert_eq!(HULL_EDGES.len(), 24);
        for (a, b) in &HULL_EDGES {
            let pa = vertex_position(a).unwrap();
            let pb = vertex_position(b).unwrap();
            assert_relative_eq!((pa - pb).norm(), 8.0_f64.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn every_vertex_belongs_to_exactly_one_axis_line() {
        let mut seen = HashSet::new();
        for (a, b) in &AXIS_LINES {
            assert!(seen.insert(*a));
            assert!(seen.insert(*b));
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn unknown_vertex_falls_back_to_timbre_blue() {
        assert_eq!(vertex_base_color("v99"), Color::rgb(0x00, 0x9D, 0xFF));
        assert_eq!(vertex_base_color("v1"), axis_group_color(AxisGroup::Tempo));
    }
}
