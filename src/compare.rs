//! Compares two selected days field by field.

use crate::columns::is_unnamed_column;
use crate::format::{format_delta, format_value};
use crate::table::error::TableError;
use crate::types::cell::Cell;
use crate::types::comparison::FieldComparison;
use crate::types::day_record::{get, DayRecord};
use polars::prelude::*;

pub const DIFF_FIELD_COLUMN: &str = "Field";
pub const DIFF_A_COLUMN: &str = "Day A";
pub const DIFF_B_COLUMN: &str = "Day B";
pub const DIFF_DIFFERENCE_COLUMN: &str = "Difference";

/// Day B's formatted value for `column` and the signed change `B - A`.
///
/// The delta is the missing glyph unless both days hold a number for `column`.
///
/// # Examples
///
/// ```
/// use daily_climate::{compare_field, Cell, DayRecord};
///
/// let a = DayRecord::new(vec![("Max Temp (°C)".into(), Cell::Number(-5.0))]);
/// let b = DayRecord::new(vec![("Max Temp (°C)".into(), Cell::Number(0.0))]);
///
/// let result = compare_field(Some(&a), Some(&b), "Max Temp (°C)", 1);
/// assert_eq!(result.value, "0.0");
/// assert_eq!(result.delta, "+5.0");
/// ```
pub fn compare_field(
    row_a: Option<&DayRecord>,
    row_b: Option<&DayRecord>,
    column: &str,
    decimals: usize,
) -> FieldComparison {
    let a = get(row_a, column).as_f64();
    let b = get(row_b, column).as_f64();
    let delta = match (a, b) {
        (Some(a), Some(b)) => Some(b - a),
        _ => None,
    };
    FieldComparison {
        value: format_value(b, decimals),
        delta: format_delta(delta, decimals),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn display_cell(cell: &Cell) -> Option<String> {
    (!cell.is_missing()).then(|| cell.to_string())
}

/// Side-by-side table of every field of two days.
///
/// Fields follow Day A's column order, then any columns only Day B has; unnamed
/// reader columns are left out. `Difference` is `B - A` rounded to two decimals
/// where both sides read as numbers, null otherwise.
///
/// Returns `None` unless both days are present.
pub fn diff_table(
    row_a: Option<&DayRecord>,
    row_b: Option<&DayRecord>,
) -> Result<Option<DataFrame>, TableError> {
    let (Some(a), Some(b)) = (row_a, row_b) else {
        return Ok(None);
    };

    let mut fields: Vec<&str> = Vec::new();
    for name in a.column_names().chain(b.column_names()) {
        if !is_unnamed_column(name) && !fields.contains(&name) {
            fields.push(name);
        }
    }

    let mut a_values = Vec::with_capacity(fields.len());
    let mut b_values = Vec::with_capacity(fields.len());
    let mut differences = Vec::with_capacity(fields.len());
    for field in &fields {
        let a_cell = get(Some(a), field);
        let b_cell = get(Some(b), field);
        let difference = match (a_cell.to_number(), b_cell.to_number()) {
            (Some(a), Some(b)) => Some(round_to_hundredths(b - a)),
            _ => None,
        };
        a_values.push(display_cell(&a_cell));
        b_values.push(display_cell(&b_cell));
        differences.push(difference);
    }

    let table = DataFrame::new(vec![
        Column::new(DIFF_FIELD_COLUMN.into(), fields),
        Column::new(DIFF_A_COLUMN.into(), a_values),
        Column::new(DIFF_B_COLUMN.into(), b_values),
        Column::new(DIFF_DIFFERENCE_COLUMN.into(), differences),
    ])?;
    Ok(Some(table))
}
