//! Converts a wide per-day table into long (Day, Series, Value) form for charting.

use crate::columns::COL_DAY;
use crate::table::error::TableError;
use crate::table::query::{has_column, numeric_cells};
use crate::types::day_record::to_calendar_number;
use polars::prelude::*;

pub const DAY_COLUMN: &str = "Day";
pub const SERIES_COLUMN: &str = "Series";
pub const VALUE_COLUMN: &str = "Value";

/// Melts `value_columns` of `month_table` into a `Day` (u32), `Series` (str),
/// `Value` (f64, nullable) table.
///
/// Rows are emitted input row by input row, one per entry of `value_columns` in
/// that order, so the output has `height * value_columns.len()` rows. With no
/// value columns the result has the three columns and zero rows.
///
/// # Errors
///
/// Returns [`TableError::ColumnNotFound`] if a value column is not in `month_table`.
pub fn to_long_form<S: AsRef<str>>(
    month_table: &DataFrame,
    value_columns: &[S],
) -> Result<DataFrame, TableError> {
    let series_values = value_columns
        .iter()
        .map(|name| {
            let name = name.as_ref();
            if has_column(month_table, name) {
                Ok((name, numeric_cells(month_table, name)))
            } else {
                Err(TableError::ColumnNotFound(name.to_string()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let height = if series_values.is_empty() {
        0
    } else {
        month_table.height()
    };
    let day_cells = numeric_cells(month_table, COL_DAY);

    let capacity = height * series_values.len();
    let mut days: Vec<Option<u32>> = Vec::with_capacity(capacity);
    let mut series: Vec<String> = Vec::with_capacity(capacity);
    let mut values: Vec<Option<f64>> = Vec::with_capacity(capacity);

    for row in 0..height {
        let day = day_cells
            .get(row)
            .copied()
            .flatten()
            .and_then(to_calendar_number);
        for (name, cells) in &series_values {
            days.push(day);
            series.push(name.to_string());
            values.push(cells.get(row).copied().flatten());
        }
    }

    Ok(DataFrame::new(vec![
        Column::new(DAY_COLUMN.into(), days),
        Column::new(SERIES_COLUMN.into(), series),
        Column::new(VALUE_COLUMN.into(), values),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::query::month_frame;
    use crate::test_fixtures::{cleaned_small_table, cleaned_two_month_table};

    const TEMPS: [&str; 3] = ["Max Temp (°C)", "Min Temp (°C)", "Mean Temp (°C)"];

    #[test]
    fn test_long_form_shape_and_order() -> Result<(), Box<dyn std::error::Error>> {
        let month = month_frame(&cleaned_small_table()?, 1)?;
        let long = to_long_form(&month, &TEMPS)?;

        assert_eq!(long.shape(), (6, 3));
        assert_eq!(long.column("Day")?.dtype(), &DataType::UInt32);

        let days: Vec<_> = long.column("Day")?.u32()?.into_iter().collect();
        assert_eq!(days, [Some(1), Some(1), Some(1), Some(2), Some(2), Some(2)]);

        let series: Vec<_> = long.column("Series")?.str()?.into_iter().flatten().collect();
        assert_eq!(series, [TEMPS, TEMPS].concat());

        let values: Vec<_> = long.column("Value")?.f64()?.into_iter().collect();
        assert_eq!(
            values,
            [Some(-5.0), Some(-12.3), Some(-8.6), Some(0.0), Some(-8.0), Some(-4.0)]
        );
        Ok(())
    }

    #[test]
    fn test_long_form_keeps_missing_values() -> Result<(), Box<dyn std::error::Error>> {
        let month = month_frame(&cleaned_small_table()?, 1)?;
        let long = to_long_form(&month, &["Total Rain (mm)"])?;
        let values: Vec<_> = long.column("Value")?.f64()?.into_iter().collect();
        assert_eq!(values, [None, Some(1.2)]);
        Ok(())
    }

    #[test]
    fn test_long_form_cardinality() -> Result<(), Box<dyn std::error::Error>> {
        let frame = cleaned_two_month_table()?;
        for month in [1, 2, 5] {
            let month = month_frame(&frame, month)?;
            for n in 0..=1 {
                let columns = &["Max Temp (°C)"][..n];
                let long = to_long_form(&month, columns)?;
                assert_eq!(long.height(), month.height() * columns.len());
            }
        }
        Ok(())
    }

    #[test]
    fn test_long_form_without_columns() -> Result<(), Box<dyn std::error::Error>> {
        let month = month_frame(&cleaned_small_table()?, 1)?;
        let long = to_long_form::<&str>(&month, &[])?;
        assert_eq!(long.shape(), (0, 3));
        assert_eq!(long.column("Series")?.dtype(), &DataType::String);
        assert_eq!(long.column("Value")?.dtype(), &DataType::Float64);
        Ok(())
    }

    #[test]
    fn test_long_form_unknown_column() -> Result<(), Box<dyn std::error::Error>> {
        let month = month_frame(&cleaned_small_table()?, 1)?;
        let result = to_long_form(&month, &["Humidex"]);
        assert!(matches!(result, Err(TableError::ColumnNotFound(ref c)) if c == "Humidex"));
        Ok(())
    }
}
