//! Linear scales mapping data extents to pixel ranges.
//!
//! Both axes use plain linear interpolation with no clamping: values
//! outside the domain project linearly beyond the pixel range. Scales are
//! recomputed from scratch on every update because both the data and the
//! viewport may have changed.

use crate::points::ScatterPoint;

/// Left gutter reserved for axis labels, in pixels.
pub const MARGIN_LEFT: f32 = 40.0;
/// Right margin, in pixels.
pub const MARGIN_RIGHT: f32 = 20.0;
/// Top margin, in pixels.
pub const MARGIN_TOP: f32 = 20.0;
/// Bottom margin reserved for axis labels, in pixels.
pub const MARGIN_BOTTOM: f32 = 30.0;

/// Domain used when a point set is empty and no extent exists.
pub const EMPTY_DOMAIN: (f32, f32) = (0.0, 1.0);

/// Linear scale for continuous domain-to-range mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// A degenerate domain (`min == max`) is legal: every input then maps
    /// to the midpoint of the range, so a single-point dataset still lands
    /// on screen instead of failing.
    #[must_use]
    pub const fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    /// Create a scale over the extent of `values`.
    ///
    /// An empty sequence falls back to the [`EMPTY_DOMAIN`] of `[0, 1]`
    /// rather than producing an unusable scale.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = f32>, range: (f32, f32)) -> Self {
        let (min, max) = values
            .into_iter()
            .fold(None, |extent, value| match extent {
                None => Some((value, value)),
                Some((min, max)) => Some((f32::min(min, value), f32::max(max, value))),
            })
            .unwrap_or(EMPTY_DOMAIN);

        Self::new((min, max), range)
    }

    /// Transform a domain value to a range value.
    #[must_use]
    pub fn scale(&self, value: f32) -> f32 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return (self.range_min + self.range_max) / 2.0;
        }
        let t = (value - self.domain_min) / span;
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Get the domain extent.
    #[must_use]
    pub const fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    /// Get the range extent.
    #[must_use]
    pub const fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Compute the x-axis scale for a point set and viewport width.
///
/// Domain is the x extent; range runs from the left gutter to the right
/// margin.
#[must_use]
pub fn x_scale(points: &[ScatterPoint], width: f32) -> LinearScale {
    LinearScale::from_values(
        points.iter().map(|point| point.x),
        (MARGIN_LEFT, width - MARGIN_RIGHT),
    )
}

/// Compute the y-axis scale for a point set and viewport height.
///
/// The range is inverted (larger data y means smaller pixel y) because the
/// drawing surface grows downward while the data axis grows upward.
#[must_use]
pub fn y_scale(points: &[ScatterPoint], height: f32) -> LinearScale {
    LinearScale::from_values(
        points.iter().map(|point| point.y),
        (height - MARGIN_BOTTOM, MARGIN_TOP),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points_with_xy(xs: &[f32], ys: &[f32]) -> Vec<ScatterPoint> {
        xs.iter()
            .zip(ys)
            .enumerate()
            .map(|(i, (&x, &y))| ScatterPoint {
                x,
                y,
                z: 0.0,
                color: crate::points::FALLBACK_COLOR.to_string(),
                category: format!("#{i}"),
                index: i as f32,
            })
            .collect()
    }

    #[test]
    fn test_linear_interpolation() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_relative_eq!(scale.scale(0.0), 0.0);
        assert_relative_eq!(scale.scale(50.0), 0.5);
        assert_relative_eq!(scale.scale(100.0), 1.0);
    }

    #[test]
    fn test_no_clamping_outside_domain() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_relative_eq!(scale.scale(-5.0), -50.0);
        assert_relative_eq!(scale.scale(20.0), 200.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (40.0, 80.0));
        assert_relative_eq!(scale.scale(5.0), 60.0);
        assert_relative_eq!(scale.scale(-123.0), 60.0);
    }

    #[test]
    fn test_from_values_extent() {
        let scale = LinearScale::from_values([3.0, -1.0, 7.0], (0.0, 1.0));
        assert_eq!(scale.domain(), (-1.0, 7.0));
    }

    #[test]
    fn test_from_values_empty_falls_back() {
        let scale = LinearScale::from_values([], (10.0, 20.0));
        assert_eq!(scale.domain(), EMPTY_DOMAIN);
        assert_relative_eq!(scale.scale(0.0), 10.0);
        assert_relative_eq!(scale.scale(1.0), 20.0);
    }

    #[test]
    fn test_x_scale_fits_extent_inside_margins() {
        // x-values {1, 5, 10} at width 100: domain [1, 10], range [40, 80].
        let points = points_with_xy(&[1.0, 5.0, 10.0], &[0.0, 0.0, 0.0]);
        let scale = x_scale(&points, 100.0);

        assert_eq!(scale.domain(), (1.0, 10.0));
        assert_eq!(scale.range(), (40.0, 80.0));
        assert_relative_eq!(scale.scale(1.0), 40.0);
        assert_relative_eq!(scale.scale(10.0), 80.0);
        assert_relative_eq!(scale.scale(5.5), 60.0);
    }

    #[test]
    fn test_y_scale_is_inverted() {
        // y-values {0, 10} at height 100: scale(0) = 70, scale(10) = 20.
        let points = points_with_xy(&[0.0, 0.0], &[0.0, 10.0]);
        let scale = y_scale(&points, 100.0);

        assert_eq!(scale.range(), (70.0, 20.0));
        assert_relative_eq!(scale.scale(0.0), 70.0);
        assert_relative_eq!(scale.scale(10.0), 20.0);
    }

    #[test]
    fn test_empty_point_set_gets_fallback_domain() {
        let scale = x_scale(&[], 200.0);
        assert_eq!(scale.domain(), EMPTY_DOMAIN);
        assert_eq!(scale.range(), (40.0, 180.0));
    }

    #[test]
    fn test_all_equal_points_hit_range_midpoint() {
        let points = points_with_xy(&[4.0, 4.0, 4.0], &[1.0, 1.0, 1.0]);
        let scale = x_scale(&points, 100.0);
        assert_relative_eq!(scale.scale(4.0), 60.0);
    }
}
