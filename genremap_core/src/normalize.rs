//! Dataset-wide normalization into a shared visual volume.
//!
//! A single affine transform (uniform scale + translation) is fitted once
//! over the union of every node and cloud position, then applied to all of
//! them. Nodes and clouds share one coordinate frame; normalizing them
//! separately would desynchronize the map.

use nalgebra::Vector3;

/// Uniform scale + center fitted over the full raw position set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationTransform {
    pub scale: f64,
    pub center: Vector3<f64>,
}

impl NormalizationTransform {
    /// The no-op transform, used for an empty dataset.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            center: Vector3::zeros(),
        }
    }

    /// Fit the transform so the union is centered at the origin and its
    /// largest axis span exactly fills `2 * target_half_extent`.
    ///
    /// One uniform scale for all axes - never per-axis factors, which would
    /// distort the polytope's geometry. Zero-width spans substitute 1 so a
    /// degenerate (single-point) dataset rescales instead of dividing by
    /// zero.
    pub fn fit<'a, I>(positions: I, target_half_extent: f64) -> Self
    where
        I: IntoIterator<Item = &'a Vector3<f64>>,
    {
        let mut min = Vector3::repeat(f64::INFINITY);
        let mut max = Vector3::repeat(f64::NEG_INFINITY);
        let mut seen = false;

        for p in positions {
            seen = true;
            for axis in 0..3 {
                if p[axis] < min[axis] {
                    min[axis] = p[axis];
                }
                if p[axis] > max[axis] {
                    max[axis] = p[axis];
                }
            }
        }

        if !seen {
            return Self::identity();
        }

        let span_x = if max.x - min.x == 0.0 { 1.0 } else { max.x - min.x };
        let span_y = if max.y - min.y == 0.0 { 1.0 } else { max.y - min.y };
        let span_z = if max.z - min.z == 0.0 { 1.0 } else { max.z - min.z };

        // largest span preserves aspect ratio
        let largest_span = span_x.max(span_y).max(span_z);

        Self {
            scale: (2.0 * target_half_extent) / largest_span,
            center: (min + max) / 2.0,
        }
    }

    /// Transform one position into the normalized frame.
    pub fn apply(&self, p: &Vector3<f64>) -> Vector3<f64> {
        (p - self.center) * self.scale
    }

    /// Transform a whole slice in place.
    pub fn apply_all(&self, positions: &mut [Vector3<f64>]) {
        for p in positions.iter_mut() {
            *p = self.apply(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spans(positions: &[Vector3<f64>]) -> (Vector3<f64>, Vector3<f64>) {
        let mut min = Vector3::repeat(f64::INFINITY);
        let mut max = Vector3::repeat(f64::NEG_INFINITY);
        for p in positions {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        (min, max)
    }

    fn sample_positions() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(1.0, 5.0, -2.0),
            Vector3::new(-3.0, 2.0, 0.5),
            Vector3::new(4.0, -1.0, 2.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(-2.5, 3.5, -1.0),
        ]
    }

    #[test]
    fn empty_set_yields_identity() {
        let positions: Vec<Vector3<f64>> = Vec::new();
        let transform = NormalizationTransform::fit(positions.iter(), 2.0);
        assert_eq!(transform, NormalizationTransform::identity());

        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(transform.apply(&p), p);
    }

    #[test]
    fn union_is_centered_at_the_origin() {
        let mut positions = sample_positions();
        let transform = NormalizationTransform::fit(positions.iter(), 2.0);
        transform.apply_all(&mut positions);

        let (min, max) = spans(&positions);
        for axis in 0..3 {
            assert_relative_eq!((min[axis] + max[axis]) / 2.0, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn largest_span_exactly_fills_target_extent() {
        let target_half_extent = 2.0;
        let mut positions = sample_positions();
        let transform = NormalizationTransform::fit(positions.iter(), target_half_extent);
        transform.apply_all(&mut positions);

        let (min, max) = spans(&positions);
        let largest = (max - min).amax();
        assert_relative_eq!(largest, 2.0 * target_half_extent, epsilon = 1e-12);
    }

    #[test]
    fn aspect_ratio_is_preserved() {
        let positions = sample_positions();
        let (min_before, max_before) = spans(&positions);
        let span_before = max_before - min_before;

        let mut normalized = positions.clone();
        let transform = NormalizationTransform::fit(positions.iter(), 2.0);
        transform.apply_all(&mut normalized);

        let (min_after, max_after) = spans(&normalized);
        let span_after = max_after - min_after;

        assert_relative_eq!(
            span_before.x / span_before.y,
            span_after.x / span_after.y,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            span_before.y / span_before.z,
            span_after.y / span_after.z,
            epsilon = 1e-9
        );
    }

    #[test]
    fn degenerate_single_point_set_is_safe() {
        let mut positions = vec![Vector3::new(3.0, -1.0, 7.0); 8];
        let transform = NormalizationTransform::fit(positions.iter(), 2.0);

        // zero spans substitute 1, so the scale stays finite
        assert!(transform.scale.is_finite());
        assert_relative_eq!(transform.scale, 4.0, epsilon = 1e-12);

        transform.apply_all(&mut positions);
        for p in &positions {
            assert_relative_eq!(p.norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn flat_plane_keeps_uniform_scale() {
        // all z equal: the z span falls back to 1 but never drives the
        // scale, and z stays unstretched relative to x/y
        let mut positions = vec![
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(10.0, 2.0, 5.0),
            Vector3::new(5.0, 4.0, 5.0),
        ];
        let transform = NormalizationTransform::fit(positions.iter(), 2.0);
        transform.apply_all(&mut positions);

        for p in &positions {
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
        }
        let (min, max) = spans(&positions);
        assert_relative_eq!(max.x - min.x, 4.0, epsilon = 1e-12);
    }
}
