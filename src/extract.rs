//! Column extraction by semantic role.
//!
//! Pulls typed sequences out of a categorical view: one numeric sequence
//! per numeric role, one string sequence for the color role. Columns with
//! no recognized role are skipped; nothing here depends on column order.

use crate::dataview::{Categorical, CellValue, Role};
use crate::points::FALLBACK_COLOR;

/// The five parallel sequences extracted from a categorical view.
///
/// Numeric sequences keep the raw coercion result, NaN included; the point
/// builder owns the default-fill policy. The color sequence is already
/// fully resolved, with null cells replaced by [`FALLBACK_COLOR`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleSeries {
    /// Horizontal positions.
    pub x: Vec<f32>,
    /// Vertical positions.
    pub y: Vec<f32>,
    /// Depth values.
    pub z: Vec<f32>,
    /// CSS fill colors.
    pub color: Vec<String>,
    /// Draw-order indices.
    pub index: Vec<f32>,
}

impl RoleSeries {
    /// Extract role series from a categorical view.
    ///
    /// Each value column contributes to at most one series, chosen by
    /// [`crate::dataview::ValueColumn::effective_role`]. When the host
    /// mistakenly tags two columns with the same role, the later column
    /// wins; correctness never depends on column order for well-formed
    /// views with at most one column per role.
    #[must_use]
    pub fn from_categorical(categorical: &Categorical) -> Self {
        let mut series = Self::default();

        for column in &categorical.values {
            match column.effective_role() {
                Some(Role::X) => series.x = numbers(&column.values),
                Some(Role::Y) => series.y = numbers(&column.values),
                Some(Role::Z) => series.z = numbers(&column.values),
                Some(Role::Color) => series.color = colors(&column.values),
                Some(Role::Index) => series.index = numbers(&column.values),
                None => {}
            }
        }

        series
    }
}

fn numbers(cells: &[CellValue]) -> Vec<f32> {
    cells.iter().map(CellValue::to_number).collect()
}

fn colors(cells: &[CellValue]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| {
            cell.as_display()
                .unwrap_or_else(|| FALLBACK_COLOR.to_string())
        })
        .collect()
}
