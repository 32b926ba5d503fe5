//! Point records and the default-fill build step.
//!
//! Zips the extracted role series into a uniform point list. Ragged or
//! missing data never shrinks the list and never errors; every gap becomes
//! a documented default.

use crate::dataview::CellValue;
use crate::extract::RoleSeries;

/// Fill color used when the color role supplies nothing for a point.
pub const FALLBACK_COLOR: &str = "#888";

/// One plotted point.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Horizontal data value. Defaults to 0 for absent or non-numeric cells.
    pub x: f32,
    /// Vertical data value. Defaults to 0 for absent or non-numeric cells.
    pub y: f32,
    /// Depth value, shown in the tooltip. Defaults like x and y.
    pub z: f32,
    /// CSS fill color. Defaults to [`FALLBACK_COLOR`].
    pub color: String,
    /// Category label. Defaults to a synthetic `#<row>` label.
    pub category: String,
    /// Draw-order index. Defaults to the row position.
    pub index: f32,
}

impl ScatterPoint {
    /// Multi-line hover text: category, index, and the raw x/y/z values.
    #[must_use]
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} [{}]\nX: {}, Y: {}, Z: {}",
            self.category, self.index, self.x, self.y, self.z
        )
    }
}

/// Build the ordered point list from the extracted series and the category
/// labels.
///
/// The output length is `max(len(x), len(y), len(categories))`; longer z,
/// color, or index columns never extend it, and shorter columns are
/// default-filled for their trailing rows. Row order is preserved.
#[must_use]
pub fn build_points(series: &RoleSeries, categories: &[CellValue]) -> Vec<ScatterPoint> {
    let count = series
        .x
        .len()
        .max(series.y.len())
        .max(categories.len());

    (0..count)
        .map(|i| ScatterPoint {
            x: finite_or_zero(series.x.get(i)),
            y: finite_or_zero(series.y.get(i)),
            z: finite_or_zero(series.z.get(i)),
            color: series
                .color
                .get(i)
                .cloned()
                .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
            category: categories
                .get(i)
                .and_then(CellValue::as_display)
                .unwrap_or_else(|| format!("#{i}")),
            // A present but malformed index cell coerces to 0 like the other
            // numeric roles; only an out-of-bounds read takes the position.
            index: match series.index.get(i) {
                Some(value) => finite_or_zero(Some(value)),
                None => i as f32,
            },
        })
        .collect()
}

fn finite_or_zero(value: Option<&f32>) -> f32 {
    value.copied().filter(|v| v.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(x: &[f32], y: &[f32]) -> RoleSeries {
        RoleSeries {
            x: x.to_vec(),
            y: y.to_vec(),
            ..RoleSeries::default()
        }
    }

    #[test]
    fn test_length_is_max_of_x_y_categories() {
        let labels: Vec<CellValue> = vec!["A".into(), "B".into(), "C".into(), "D".into()];
        let points = build_points(&series(&[1.0, 2.0], &[1.0]), &labels);
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_long_z_color_index_do_not_extend() {
        let role_series = RoleSeries {
            x: vec![1.0],
            y: vec![2.0],
            z: vec![9.0, 9.0, 9.0],
            color: vec!["red".into(), "green".into(), "blue".into()],
            index: vec![5.0, 6.0, 7.0],
        };
        let points = build_points(&role_series, &[]);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_trailing_rows_default_filled() {
        let labels: Vec<CellValue> = vec!["A".into(), "B".into(), "C".into()];
        let points = build_points(&series(&[10.0], &[20.0]), &labels);

        assert_eq!(points[0].x, 10.0);
        assert_eq!(points[1].x, 0.0);
        assert_eq!(points[2].y, 0.0);
        assert_eq!(points[2].color, FALLBACK_COLOR);
        assert_eq!(points[2].index, 2.0);
    }

    #[test]
    fn test_non_finite_positions_become_zero() {
        let points = build_points(&series(&[f32::NAN, 1.0], &[2.0, f32::INFINITY]), &[]);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].y, 0.0);
    }

    #[test]
    fn test_null_category_gets_synthetic_label() {
        let labels = vec![CellValue::from("A"), CellValue::Null];
        let points = build_points(&series(&[1.0, 2.0], &[1.0, 2.0]), &labels);
        assert_eq!(points[0].category, "A");
        assert_eq!(points[1].category, "#1");
    }

    #[test]
    fn test_numeric_category_uses_display_form() {
        let labels = vec![CellValue::Number(2024.0)];
        let points = build_points(&series(&[1.0], &[1.0]), &labels);
        assert_eq!(points[0].category, "2024");
    }

    #[test]
    fn test_malformed_index_cell_is_zero_not_position() {
        let role_series = RoleSeries {
            x: vec![1.0, 2.0],
            y: vec![1.0, 2.0],
            index: vec![f32::NAN, 4.0],
            ..RoleSeries::default()
        };
        let points = build_points(&role_series, &[]);
        assert_eq!(points[0].index, 0.0);
        assert_eq!(points[1].index, 4.0);
    }

    #[test]
    fn test_empty_inputs_build_nothing() {
        assert!(build_points(&RoleSeries::default(), &[]).is_empty());
    }

    #[test]
    fn test_determinism() {
        let labels: Vec<CellValue> = vec!["A".into(), "B".into()];
        let role_series = series(&[1.0, 2.0], &[3.0, 4.0]);
        let first = build_points(&role_series, &labels);
        let second = build_points(&role_series, &labels);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tooltip_text() {
        let point = ScatterPoint {
            x: 1.0,
            y: 2.5,
            z: 0.0,
            color: "#888".to_string(),
            category: "North".to_string(),
            index: 3.0,
        };
        assert_eq!(point.tooltip_text(), "North [3]\nX: 1, Y: 2.5, Z: 0");
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_cell() -> impl Strategy<Value = CellValue> {
        prop_oneof![
            any::<f32>().prop_map(CellValue::Number),
            "[a-z0-9.#]{0,8}".prop_map(CellValue::Text),
            Just(CellValue::Null),
        ]
    }

    fn arb_numbers() -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(any::<f32>(), 0..32)
    }

    proptest! {
        /// Output length is exactly max(len(x), len(y), len(categories)).
        #[test]
        fn prop_length_is_max(
            x in arb_numbers(),
            y in arb_numbers(),
            categories in prop::collection::vec(arb_cell(), 0..32),
            z in arb_numbers(),
            index in arb_numbers()
        ) {
            let role_series = RoleSeries {
                x: x.clone(),
                y: y.clone(),
                z,
                color: Vec::new(),
                index,
            };
            let points = build_points(&role_series, &categories);
            prop_assert_eq!(points.len(), x.len().max(y.len()).max(categories.len()));
        }

        /// Every built point carries finite positions; gaps become zero.
        #[test]
        fn prop_positions_always_finite(
            x in arb_numbers(),
            y in arb_numbers()
        ) {
            let role_series = RoleSeries {
                x,
                y,
                ..RoleSeries::default()
            };
            for point in build_points(&role_series, &[]) {
                prop_assert!(point.x.is_finite());
                prop_assert!(point.y.is_finite());
                prop_assert!(point.z.is_finite());
            }
        }

        /// Rows past the color column always wear the fallback color.
        #[test]
        fn prop_missing_color_is_fallback(
            len in 0usize..24,
            colors in prop::collection::vec("[a-z#0-9]{1,7}", 0..24)
        ) {
            let role_series = RoleSeries {
                x: vec![1.0; len],
                y: vec![1.0; len],
                color: colors.clone(),
                ..RoleSeries::default()
            };
            let points = build_points(&role_series, &[]);
            for (i, point) in points.iter().enumerate() {
                if i >= colors.len() {
                    prop_assert_eq!(point.color.as_str(), FALLBACK_COLOR);
                }
            }
        }
    }
}
