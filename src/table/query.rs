//! Month/day listings, row selection and category grouping over a cleaned table.

use crate::columns::{COL_DAY, COL_MONTH};
use crate::table::error::TableError;
use crate::types::category::CategoryGroups;
use crate::types::day_record::DayRecord;
use log::warn;
use polars::prelude::*;

/// The cells of `name` as numbers. An absent or non-numeric column reads as empty.
pub(crate) fn numeric_cells(frame: &DataFrame, name: &str) -> Vec<Option<f64>> {
    let Ok(column) = frame.column(name) else {
        return Vec::new();
    };
    let Ok(values) = column.cast(&DataType::Float64) else {
        return Vec::new();
    };
    match values.f64() {
        Ok(ca) => ca.into_iter().collect(),
        Err(_) => Vec::new(),
    }
}

pub(crate) fn has_column(frame: &DataFrame, name: &str) -> bool {
    frame
        .get_columns()
        .iter()
        .any(|column| column.name().as_str() == name)
}

/// Distinct whole, non-negative values of `name` in `frame`, ascending.
///
/// Values are truncated to integers; missing, negative and non-finite cells are skipped.
fn distinct_calendar_numbers(frame: LazyFrame, name: &str) -> PolarsResult<Vec<u32>> {
    let in_range = col(name)
        .gt_eq(lit(0.0))
        .and(col(name).lt_eq(lit(u32::MAX as f64)));
    let distinct = frame
        .select([col(name).cast(DataType::Float64)])
        .filter(in_range)
        .select([col(name)
            .cast(DataType::UInt32)
            .unique()
            .sort(SortOptions::default())])
        .collect()?;
    Ok(distinct.column(name)?.u32()?.into_iter().flatten().collect())
}

/// Distinct months present in the `Month` column, ascending. Missing values are skipped.
pub fn months(frame: &DataFrame) -> Result<Vec<u32>, TableError> {
    if !has_column(frame, COL_MONTH) {
        return Ok(Vec::new());
    }
    Ok(distinct_calendar_numbers(frame.clone().lazy(), COL_MONTH)?)
}

/// Distinct days recorded for `month`, ascending. Empty if the month has no rows.
pub fn days(frame: &DataFrame, month: u32) -> Result<Vec<u32>, TableError> {
    if !has_column(frame, COL_MONTH) || !has_column(frame, COL_DAY) {
        return Ok(Vec::new());
    }
    let month_rows = frame
        .clone()
        .lazy()
        .filter(col(COL_MONTH).cast(DataType::Float64).eq(lit(month as f64)));
    Ok(distinct_calendar_numbers(month_rows, COL_DAY)?)
}

/// Positions of the rows whose month and day equal the arguments, in table order.
fn matching_rows(frame: &DataFrame, month: u32, day: u32) -> Vec<usize> {
    let month_cells = numeric_cells(frame, COL_MONTH);
    let day_cells = numeric_cells(frame, COL_DAY);
    month_cells
        .into_iter()
        .zip(day_cells)
        .enumerate()
        .filter(|(_, (m, d))| *m == Some(month as f64) && *d == Some(day as f64))
        .map(|(idx, _)| idx)
        .collect()
}

/// The row recorded for (`month`, `day`), or `None` if there is none.
///
/// When the data holds the same date more than once, the first row in table
/// order is returned.
pub fn row_for(frame: &DataFrame, month: u32, day: u32) -> Result<Option<DayRecord>, TableError> {
    let rows = matching_rows(frame, month, day);
    let Some(&first) = rows.first() else {
        return Ok(None);
    };
    if rows.len() > 1 {
        warn!(
            "{} rows recorded for month {} day {}; using the first",
            rows.len(),
            month,
            day
        );
    }
    Ok(Some(DayRecord::from_row(frame, first)?))
}

/// The rows of `month`, ordered by day (stable, missing days last).
///
/// Returns an empty frame with the same columns when the month has no rows or
/// the table has no `Month` column.
pub fn month_frame(frame: &DataFrame, month: u32) -> Result<DataFrame, TableError> {
    if !has_column(frame, COL_MONTH) {
        return Ok(frame.clear());
    }
    let mut lazy = frame
        .clone()
        .lazy()
        .filter(col(COL_MONTH).eq(lit(month as f64)));
    if has_column(frame, COL_DAY) {
        lazy = lazy.sort(
            [COL_DAY],
            SortMultipleOptions::default()
                .with_maintain_order(true)
                .with_nulls_last(true),
        );
    }
    Ok(lazy.collect()?)
}

/// Maps every category to the candidate columns present in `frame`.
pub fn category_groups(frame: &DataFrame) -> CategoryGroups {
    CategoryGroups::new(|name| has_column(frame, name))
}
