//! In-memory tables shared by the unit tests.

use crate::table::cleaner::{clean, CleanOptions};
use polars::prelude::*;

/// Two January days at Ottawa, with numbers stored as strings, an em-dash
/// placeholder, a noise column and a flag column.
pub fn raw_small_table() -> PolarsResult<DataFrame> {
    df!(
        "Station Name" => ["Ottawa", "Ottawa"],
        "Year" => [2000i64, 2000],
        "Month" => [1i64, 1],
        "Day" => [1i64, 2],
        "Max Temp (°C)" => ["-5.0", "0.0"],
        "Min Temp (°C)" => ["-12.3", "-8.0"],
        "Mean Temp (°C)" => ["-8.6", "-4.0"],
        "Total Rain (mm)" => ["—", "1.2"],
        "Total Precip (mm)" => ["0", "1.2"],
        "Total Snow (cm)" => ["3", "0"],
        "Snow on Grnd (cm)" => ["9", "8"],
        "Spd of Max Gust (km/h)" => ["25", "30"],
        "Dir of Max Gust (10s deg)" => ["12", "18"],
        "Data Quality" => ["X", "X"],
        "Some Flag" => ["Y", "N"],
    )
}

pub fn cleaned_small_table() -> Result<DataFrame, Box<dyn std::error::Error>> {
    Ok(clean(&raw_small_table()?, &CleanOptions::default())?)
}

/// A shuffled two-month table with a duplicated date and a row missing its day.
pub fn cleaned_two_month_table() -> Result<DataFrame, Box<dyn std::error::Error>> {
    let raw = df!(
        "Station Name" => [Some("Ottawa"), Some("Ottawa"), Some("Ottawa"), Some("Ottawa"), Some("Ottawa"), Some("Ottawa")],
        "Month" => [Some("2"), Some("1"), Some("2"), Some("2"), None, Some("2")],
        "Day" => [Some("3"), Some("31"), Some("1"), Some("3"), Some("4"), None],
        "Max Temp (°C)" => [Some("1.0"), Some("-2.0"), Some("3.5"), Some("9.9"), Some("0.0"), Some("7.0")],
    )?;
    Ok(clean(&raw, &CleanOptions::default())?)
}

pub fn column_names(frame: &DataFrame) -> Vec<&str> {
    frame
        .get_columns()
        .iter()
        .map(|column| column.name().as_str())
        .collect()
}
