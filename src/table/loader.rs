//! Reads a station CSV export into a raw, all-text table.

use crate::columns::UNNAMED_COLUMN_MARKER;
use crate::table::error::TableError;
use log::info;
use polars::prelude::*;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads a headered CSV file. Every column is read as `String`; typing is left to
/// [`crate::clean`].
///
/// Blank header names are renamed to `Unnamed: <index>` and a leading byte-order
/// mark is removed from the first header.
///
/// # Errors
///
/// Returns [`TableError::FileNotFound`] if `path` does not exist, and
/// [`TableError::CsvRead`] if the file cannot be parsed.
pub fn read_raw_csv(path: impl AsRef<Path>) -> Result<DataFrame, TableError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(TableError::FileNotFound(path.to_path_buf()));
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| TableError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| TableError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let names = normalized_header(&df);
    df.set_column_names(names.iter().map(String::as_str))?;

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

fn normalized_header(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let name = column.name().as_str();
            let name = if idx == 0 {
                name.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                name
            };
            if name.trim().is_empty() {
                format!("{} {}", UNNAMED_COLUMN_MARKER, idx)
            } else {
                name.to_string()
            }
        })
        .collect()
}
