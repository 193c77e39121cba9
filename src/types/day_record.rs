//! Defines [`DayRecord`], one selected row of a cleaned table, and the total
//! accessors [`get`] and [`get_or`] over a possibly-absent record.

use crate::columns::{COL_DAY, COL_MONTH};
use crate::types::cell::Cell;
use polars::prelude::*;

/// A single row of a cleaned table, with its cells in table column order.
///
/// Records are produced on demand by [`crate::ClimateTable::row_for`] and are
/// identified by their (month, day) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    fields: Vec<(String, Cell)>,
}

impl DayRecord {
    /// Creates a record from `(column name, cell)` pairs.
    pub fn new(fields: Vec<(String, Cell)>) -> Self {
        Self { fields }
    }

    /// Reads row `idx` of `frame`. String columns give text cells, every other
    /// column is read as a number.
    pub fn from_row(frame: &DataFrame, idx: usize) -> PolarsResult<Self> {
        let mut fields = Vec::with_capacity(frame.width());
        for column in frame.get_columns() {
            let cell = match column.dtype() {
                DataType::String => Cell::from_text(column.str()?.get(idx)),
                _ => Cell::from_number(column.get(idx)?.extract::<f64>()),
            };
            fields.push((column.name().to_string(), cell));
        }
        Ok(Self { fields })
    }

    /// Returns the cell stored under `column`, if the record has that column.
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    /// The numeric value of `column`, or `None` if absent, missing or text.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(Cell::as_f64)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn month(&self) -> Option<u32> {
        self.number(COL_MONTH).and_then(to_calendar_number)
    }

    pub fn day(&self) -> Option<u32> {
        self.number(COL_DAY).and_then(to_calendar_number)
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn fields(&self) -> &[(String, Cell)] {
        &self.fields
    }
}

/// Converts a month/day cell to an integer; negative and non-finite values are rejected.
pub(crate) fn to_calendar_number(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Returns the cell for `column` of `row`, or [`Cell::Missing`] when the row is
/// absent or has no such column.
pub fn get(row: Option<&DayRecord>, column: &str) -> Cell {
    get_or(row, column, Cell::Missing)
}

/// Returns the cell for `column` of `row`, or `default` when the row is absent or
/// has no such column. A present column holding a missing value yields
/// [`Cell::Missing`], not `default`.
pub fn get_or(row: Option<&DayRecord>, column: &str, default: Cell) -> Cell {
    row.and_then(|r| r.get(column))
        .cloned()
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DayRecord {
        DayRecord::new(vec![
            ("Station Name".to_string(), Cell::Text("Ottawa".to_string())),
            ("Month".to_string(), Cell::Number(1.0)),
            ("Day".to_string(), Cell::Number(2.0)),
            ("Total Rain (mm)".to_string(), Cell::Missing),
            ("Total Precip (mm)".to_string(), Cell::Number(0.0)),
        ])
    }

    #[test]
    fn test_get_present_value() {
        let row = sample();
        assert_eq!(get(Some(&row), "Total Precip (mm)"), Cell::Number(0.0));
        assert_eq!(row.number("Total Precip (mm)"), Some(0.0));
        assert_eq!(row.month(), Some(1));
        assert_eq!(row.day(), Some(2));
    }

    #[test]
    fn test_get_absent_row_or_column_uses_default() {
        let row = sample();
        assert_eq!(get(None, "Total Precip (mm)"), Cell::Missing);
        assert_eq!(get(Some(&row), "Not A Column"), Cell::Missing);
        assert_eq!(
            get_or(Some(&row), "Not A Column", Cell::Number(-1.0)),
            Cell::Number(-1.0)
        );
        assert_eq!(get_or(None, "Day", Cell::Number(-1.0)), Cell::Number(-1.0));
    }

    #[test]
    fn test_get_missing_value_is_not_replaced_by_default() {
        let row = sample();
        assert_eq!(
            get_or(Some(&row), "Total Rain (mm)", Cell::Number(-1.0)),
            Cell::Missing
        );
    }

    #[test]
    fn test_from_row_reads_text_and_numbers() -> Result<(), Box<dyn std::error::Error>> {
        let frame = df!(
            "Station Name" => [Some("Ottawa"), Some("Ottawa")],
            "Day" => [Some(1.0f64), None],
        )?;
        let row = DayRecord::from_row(&frame, 1)?;
        assert_eq!(row.get("Station Name"), Some(&Cell::Text("Ottawa".into())));
        assert_eq!(row.get("Day"), Some(&Cell::Missing));
        assert_eq!(row.column_names().collect::<Vec<_>>(), ["Station Name", "Day"]);
        Ok(())
    }

    #[test]
    fn test_calendar_number_rejects_invalid() {
        assert_eq!(to_calendar_number(12.0), Some(12));
        assert_eq!(to_calendar_number(-1.0), None);
        assert_eq!(to_calendar_number(f64::NAN), None);
    }
}
