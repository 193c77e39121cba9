//! Normalises a raw station table into a typed table: noise and quality-flag
//! columns are removed, and every column outside the text allow-list becomes a
//! nullable `Float64` column.

use crate::columns::{COL_DATE_TIME, COL_STATION_NAME};
use crate::table::error::TableError;
use bon::Builder;
use log::debug;
use polars::prelude::*;

/// Columns of the daily export that carry no information for the viewer.
pub const DEFAULT_NOISE_COLUMNS: [&str; 6] = [
    "Climate ID",
    "Data Quality",
    "Longitude (x)",
    "Latitude (y)",
    "Heat Deg Days (°C)",
    "Cool Deg Days (°C)",
];

/// Columns kept as text instead of being coerced to numbers.
pub const DEFAULT_TEXT_COLUMNS: [&str; 2] = [COL_STATION_NAME, COL_DATE_TIME];

/// Quality-flag columns end with this suffix ("Max Temp Flag").
pub const DEFAULT_FLAG_SUFFIX: &str = "Flag";

fn default_noise_columns() -> Vec<String> {
    DEFAULT_NOISE_COLUMNS.iter().map(|s| s.to_string()).collect()
}

fn default_text_columns() -> Vec<String> {
    DEFAULT_TEXT_COLUMNS.iter().map(|s| s.to_string()).collect()
}

/// Which columns [`clean`] drops and which it keeps as text.
///
/// Names that do not occur in the table are ignored.
///
/// # Examples
///
/// ```
/// use daily_climate::CleanOptions;
///
/// let defaults = CleanOptions::default();
/// assert!(defaults.is_dropped("Data Quality"));
/// assert!(defaults.is_dropped("Max Temp Flag"));
///
/// let custom = CleanOptions::builder()
///     .noise_columns(vec!["Climate ID".to_string()])
///     .flag_suffix("_qc")
///     .build();
/// assert!(custom.is_dropped("tmax_qc"));
/// assert!(!custom.is_dropped("Data Quality"));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct CleanOptions {
    #[builder(default = default_noise_columns())]
    pub noise_columns: Vec<String>,
    #[builder(default = default_text_columns())]
    pub text_columns: Vec<String>,
    #[builder(into, default = DEFAULT_FLAG_SUFFIX.to_string())]
    pub flag_suffix: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CleanOptions {
    /// `true` for noise columns and quality-flag columns.
    pub fn is_dropped(&self, column: &str) -> bool {
        self.noise_columns.iter().any(|noise| noise == column)
            || (!self.flag_suffix.is_empty() && column.ends_with(&self.flag_suffix))
    }

    pub fn keeps_text(&self, column: &str) -> bool {
        self.text_columns.iter().any(|text| text == column)
    }
}

/// Parses one raw cell as a number.
///
/// Blank cells, placeholder dashes, letter codes ("M", "T") and anything else
/// that is not a finite float give `None`; this never fails.
///
/// ```
/// use daily_climate::parse_numeric_cell;
///
/// assert_eq!(parse_numeric_cell(" -5.0 "), Some(-5.0));
/// assert_eq!(parse_numeric_cell("—"), None);
/// assert_eq!(parse_numeric_cell("M"), None);
/// assert_eq!(parse_numeric_cell("NaN"), None);
/// ```
pub fn parse_numeric_cell(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Returns a cleaned copy of `raw`; the input is not modified.
///
/// Dropped: every column named in `options.noise_columns` and every column whose
/// name ends with `options.flag_suffix`. Text columns are kept as `String`; every
/// other column is retyped to `Float64`, with unparseable cells becoming null.
/// A column polars cannot cast at all (a list, say) is kept as an all-null column.
///
/// Cleaning a cleaned table returns an equal table.
pub fn clean(raw: &DataFrame, options: &CleanOptions) -> Result<DataFrame, TableError> {
    let mut columns = Vec::with_capacity(raw.width());
    for column in raw.get_columns() {
        let name = column.name().as_str();
        if options.is_dropped(name) {
            debug!("Dropping column '{}'", name);
            continue;
        }
        let cleaned = if options.keeps_text(name) {
            to_text_column(column)
        } else {
            to_numeric_column(column)?
        };
        columns.push(cleaned);
    }
    debug!(
        "Cleaned table: kept {} of {} columns, {} rows",
        columns.len(),
        raw.width(),
        raw.height()
    );
    Ok(DataFrame::new(columns)?)
}

/// `column` cast to `dtype`, or an all-null column of that type when polars has
/// no cast for it (lists, structs).
fn cast_or_null(column: &Column, dtype: &DataType) -> Column {
    column.cast(dtype).unwrap_or_else(|err| {
        debug!(
            "Column '{}' of type {} cannot become {}: {}; using nulls",
            column.name(),
            column.dtype(),
            dtype,
            err
        );
        Column::full_null(column.name().clone(), column.len(), dtype)
    })
}

fn to_text_column(column: &Column) -> Column {
    match column.dtype() {
        DataType::String => column.clone(),
        _ => cast_or_null(column, &DataType::String),
    }
}

fn to_numeric_column(column: &Column) -> PolarsResult<Column> {
    let values: Vec<Option<f64>> = match column.dtype() {
        DataType::String => column
            .str()?
            .into_iter()
            .map(|cell| cell.and_then(parse_numeric_cell))
            .collect(),
        _ => cast_or_null(column, &DataType::Float64)
            .f64()?
            .into_iter()
            .map(|value| value.filter(|v| v.is_finite()))
            .collect(),
    };
    Ok(Column::new(column.name().clone(), values))
}
