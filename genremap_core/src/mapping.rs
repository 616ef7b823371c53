//! Trait vector -> 3D position mapping.
//!
//! Each of the six trait dimensions interpolates between its axis endpoint
//! pair on the boundary polytope; the six contributions are averaged and
//! inflated by a uniform visual constant. The mapping is pure and
//! deterministic: identical trait vectors always yield identical positions.

use nalgebra::Vector3;

use crate::polytope::AXIS_ENDPOINTS;
use crate::traits::{TraitVector, TRAIT_EXTENT};

/// Tuning constants for the mapping / normalization pipeline.
///
/// These are visual knobs, not invariants: changing them rescales the map
/// but never affects centering or aspect ratio.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Uniform inflation applied after averaging the six axis contributions.
    pub position_scale: f64,

    /// Half-extent of the normalized target volume.
    pub target_half_extent: f64,

    /// Samples drawn per region cloud.
    pub points_per_region: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            position_scale: 2.0,
            target_half_extent: 2.0,
            points_per_region: 160,
        }
    }
}

/// Map a six-dimensional trait vector to a raw 3D position.
///
/// Every dimension is clamped into `[-2, 2]` first; clamping is part of the
/// contract, not a precondition on the caller. A value at exactly +2 or -2
/// reproduces that endpoint with full weight, a value of 0 lands on the
/// axis midpoint.
pub fn map_position(values: &TraitVector, config: &MapConfig) -> Vector3<f64> {
    let raw = values.as_array();
    let mut sum = Vector3::zeros();

    for (value, (pos_end, neg_end)) in raw.iter().zip(AXIS_ENDPOINTS.iter()) {
        let v = value.clamp(-TRAIT_EXTENT, TRAIT_EXTENT);

        let w_pos = (TRAIT_EXTENT + v) / (2.0 * TRAIT_EXTENT);
        let w_neg = (TRAIT_EXTENT - v) / (2.0 * TRAIT_EXTENT);

        sum += Vector3::from(*pos_end) * w_pos + Vector3::from(*neg_end) * w_neg;
    }

    // average over the six axes, then inflate for visual spread
    sum / AXIS_ENDPOINTS.len() as f64 * config.position_scale
}

/// Render emphasis for a node marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Default,
    Hovered,
    Selected,
}

/// Marker radius hint from an "energy" mix of traits.
///
/// The mean of speed, complexity, synthetic and temperature is clamped to
/// `[-2, 2]`, rescaled to `[0, 1]` and mapped into a small fixed radius
/// band, with bumps for hover / selection.
pub fn node_radius(values: &TraitVector, emphasis: Emphasis) -> f64 {
    let energy = (values.tempo_speed
        + values.tempo_complexity
        + values.sonic_synthetic
        + values.sonic_temperature)
        / 4.0;

    let norm = (energy.clamp(-TRAIT_EXTENT, TRAIT_EXTENT) + TRAIT_EXTENT) / (2.0 * TRAIT_EXTENT);
    let base = 0.07 + norm * 0.06;

    match emphasis {
        Emphasis::Selected => base + 0.06,
        Emphasis::Hovered => base + 0.03,
        Emphasis::Default => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_vector_maps_to_the_origin() {
        let p = map_position(&TraitVector::ZERO, &MapConfig::default());
        assert_relative_eq!(p.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn endpoints_reproduced_on_every_axis() {
        let config = MapConfig::default();

        for (dim, (pos_end, neg_end)) in AXIS_ENDPOINTS.iter().enumerate() {
            for (value, end) in [(2.0, pos_end), (-2.0, neg_end)] {
                let mut raw = [0.0; 6];
                raw[dim] = value;

                let p = map_position(&TraitVector::from_array(raw), &config);
                // the other five axes contribute their midpoint, the origin
                let expected = Vector3::from(*end) / 6.0 * config.position_scale;

                assert_relative_eq!(p.x, expected.x, epsilon = 1e-12);
                assert_relative_eq!(p.y, expected.y, epsilon = 1e-12);
                assert_relative_eq!(p.z, expected.z, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = MapConfig::default();

        let mut wild = TraitVector::ZERO;
        wild.tempo_speed = 10.0;
        let mut clamped = TraitVector::ZERO;
        clamped.tempo_speed = 2.0;

        assert_eq!(map_position(&wild, &config), map_position(&clamped, &config));
    }

    #[test]
    fn mapping_is_deterministic() {
        let config = MapConfig::default();
        let values = TraitVector {
            tempo_speed: 0.7,
            tempo_complexity: -1.3,
            harmonic_quality: 0.2,
            harmonic_density: 1.9,
            sonic_temperature: -0.4,
            sonic_synthetic: 1.1,
        };

        assert_eq!(map_position(&values, &config), map_position(&values, &config));
    }

    #[test]
    fn two_axes_at_full_weight() {
        // speed and complexity at +2; the four remaining axes sit at their
        // midpoints, which all collapse to the origin
        let mut values = TraitVector::ZERO;
        values.tempo_speed = 2.0;
        values.tempo_complexity = 2.0;

        let p = map_position(&values, &MapConfig::default());

        // ((2,2,0) + (2,-2,0)) / 6 * 2
        assert_relative_eq!(p.x, 4.0 / 6.0 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn radius_band_and_emphasis_bumps() {
        // zero energy sits at the middle of the band
        let mid = TraitVector::ZERO;
        assert_relative_eq!(node_radius(&mid, Emphasis::Default), 0.10, epsilon = 1e-12);
        assert_relative_eq!(node_radius(&mid, Emphasis::Hovered), 0.13, epsilon = 1e-12);
        assert_relative_eq!(node_radius(&mid, Emphasis::Selected), 0.16, epsilon = 1e-12);

        let loud = TraitVector {
            tempo_speed: 2.0,
            tempo_complexity: 2.0,
            harmonic_quality: 0.0,
            harmonic_density: 0.0,
            sonic_temperature: 2.0,
            sonic_synthetic: 2.0,
        };
        assert_relative_eq!(node_radius(&loud, Emphasis::Default), 0.13, epsilon = 1e-12);

        let quiet = TraitVector {
            tempo_speed: -2.0,
            tempo_complexity: -2.0,
            harmonic_quality: 0.0,
            harmonic_density: 0.0,
            sonic_temperature: -2.0,
            sonic_synthetic: -2.0,
        };
        assert_relative_eq!(node_radius(&quiet, Emphasis::Default), 0.07, epsilon = 1e-12);
    }

    #[test]
    fn radius_clamps_runaway_energy() {
        let mut wild = TraitVector::ZERO;
        wild.tempo_speed = 100.0;
        wild.tempo_complexity = 100.0;
        wild.sonic_temperature = 100.0;
        wild.sonic_synthetic = 100.0;

        assert_relative_eq!(node_radius(&wild, Emphasis::Default), 0.13, epsilon = 1e-12);
    }
}
