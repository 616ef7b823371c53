//! Trait vectors - the six bounded musical-style dimensions.
//!
//! Every track (and every region bound) is described by six scalars, each
//! semantically an axis position in `[-2, +2]`. Raw records may carry
//! out-of-range values; the mapper clamps them rather than rejecting them.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Half-width of every trait axis; raw values are clamped into
/// `[-TRAIT_EXTENT, +TRAIT_EXTENT]` before use.
pub const TRAIT_EXTENT: f64 = 2.0;

/// The six musical-style dimensions of a track.
///
/// Field names serialize in camelCase to match the bundled JSON records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitVector {
    /// Rhythm speed: -2 slow ... +2 fast
    pub tempo_speed: f64,

    /// Rhythm complexity: -2 simple ... +2 complex
    pub tempo_complexity: f64,

    /// Harmonic quality: -2 dissonant ... +2 consonant
    pub harmonic_quality: f64,

    /// Harmonic density: -2 simple ... +2 dense
    pub harmonic_density: f64,

    /// Sonic temperature: -2 cold ... +2 warm
    pub sonic_temperature: f64,

    /// Synthetic vs organic timbre: -2 organic ... +2 synthetic
    pub sonic_synthetic: f64,
}

impl TraitVector {
    /// All dimensions at the axis midpoint.
    pub const ZERO: TraitVector = TraitVector {
        tempo_speed: 0.0,
        tempo_complexity: 0.0,
        harmonic_quality: 0.0,
        harmonic_density: 0.0,
        sonic_temperature: 0.0,
        sonic_synthetic: 0.0,
    };

    /// Values in the fixed axis order used by the polytope endpoint table.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.tempo_speed,
            self.tempo_complexity,
            self.harmonic_quality,
            self.harmonic_density,
            self.sonic_temperature,
            self.sonic_synthetic,
        ]
    }

    /// Inverse of [`TraitVector::as_array`].
    pub fn from_array(values: [f64; 6]) -> Self {
        TraitVector {
            tempo_speed: values[0],
            tempo_complexity: values[1],
            harmonic_quality: values[2],
            harmonic_density: values[3],
            sonic_temperature: values[4],
            sonic_synthetic: values[5],
        }
    }
}

/// Inclusive `[min, max]` range for one trait dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRange {
    pub min: f64,
    pub max: f64,
}

impl TraitRange {
    /// Uniform sample from the range. A degenerate range (`min == max`)
    /// always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// Per-dimension ranges defining a region of trait space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitBounds {
    pub tempo_speed: TraitRange,
    pub tempo_complexity: TraitRange,
    pub harmonic_quality: TraitRange,
    pub harmonic_density: TraitRange,
    pub sonic_temperature: TraitRange,
    pub sonic_synthetic: TraitRange,
}

impl TraitBounds {
    /// Draw one trait vector from the bounds, each dimension sampled
    /// independently and uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TraitVector {
        TraitVector {
            tempo_speed: self.tempo_speed.sample(rng),
            tempo_complexity: self.tempo_complexity.sample(rng),
            harmonic_quality: self.harmonic_quality.sample(rng),
            harmonic_density: self.harmonic_density.sample(rng),
            sonic_temperature: self.sonic_temperature.sample(rng),
            sonic_synthetic: self.sonic_synthetic.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn array_round_trip_preserves_axis_order() {
        let values = TraitVector {
            tempo_speed: 1.0,
            tempo_complexity: -1.0,
            harmonic_quality: 0.5,
            harmonic_density: -0.5,
            sonic_temperature: 2.0,
            sonic_synthetic: -2.0,
        };
        assert_eq!(TraitVector::from_array(values.as_array()), values);
    }

    #[test]
    fn degenerate_range_samples_its_single_value() {
        let mut rng = StdRng::seed_from_u64(1);
        let range = TraitRange { min: 1.0, max: 1.0 };
        for _ in 0..16 {
            assert_eq!(range.sample(&mut rng), 1.0);
        }
    }

    #[test]
    fn samples_stay_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let range = TraitRange { min: -1.5, max: 0.25 };
        for _ in 0..256 {
            let v = range.sample(&mut rng);
            assert!(v >= -1.5 && v < 0.25);
        }
    }

    #[test]
    fn records_deserialize_from_camel_case() {
        let json = r#"{
            "tempoSpeed": 2.0,
            "tempoComplexity": 0.0,
            "harmonicQuality": -1.0,
            "harmonicDensity": 0.5,
            "sonicTemperature": 1.5,
            "sonicSynthetic": -0.5
        }"#;
        let values: TraitVector = serde_json::from_str(json).unwrap();
        assert_eq!(values.tempo_speed, 2.0);
        assert_eq!(values.sonic_synthetic, -0.5);
    }
}
