//! Derives the station name and report year of a cleaned table.

use crate::columns::{COL_DATE_TIME, COL_STATION_NAME, COL_YEAR};
use crate::types::station_metadata::{StationMetadata, FALLBACK_STATION_NAME};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Returns the station name and report year of `frame`. Never fails.
///
/// The station name is the first non-missing `Station Name` value, falling back
/// to `"Station"`. The year comes from the first non-missing `Year` value, else
/// from the first parseable `Date/Time` value, else it is `None`.
pub fn station_and_year(frame: &DataFrame) -> StationMetadata {
    let station = first_text(frame, COL_STATION_NAME)
        .unwrap_or_else(|| FALLBACK_STATION_NAME.to_string());
    let year = year_from_column(frame).or_else(|| year_from_timestamp(frame));
    StationMetadata::new(station, year)
}

fn text_values(frame: &DataFrame, name: &str) -> Vec<String> {
    let Ok(column) = frame.column(name) else {
        return Vec::new();
    };
    let Ok(text) = column.cast(&DataType::String) else {
        return Vec::new();
    };
    match text.str() {
        Ok(ca) => ca
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn first_text(frame: &DataFrame, name: &str) -> Option<String> {
    text_values(frame, name).into_iter().next()
}

fn year_from_column(frame: &DataFrame) -> Option<i32> {
    let column = frame.column(COL_YEAR).ok()?;
    let years = column.cast(&DataType::Float64).ok()?;
    let first = years
        .f64()
        .ok()?
        .into_iter()
        .flatten()
        .find(|year| year.is_finite())?;
    Some(first.trunc() as i32)
}

fn year_from_timestamp(frame: &DataFrame) -> Option<i32> {
    text_values(frame, COL_DATE_TIME)
        .iter()
        .find_map(|value| parse_timestamp_year(value))
}

/// Year component of a date or date-time string, or `None` if it does not parse.
pub(crate) fn parse_timestamp_year(value: &str) -> Option<i32> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
        .map(|date| date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::cleaner::{clean, CleanOptions};
    use crate::test_fixtures::{cleaned_small_table, raw_small_table};

    #[test]
    fn test_station_and_year_from_columns() -> Result<(), Box<dyn std::error::Error>> {
        let metadata = station_and_year(&cleaned_small_table()?);
        assert_eq!(metadata, StationMetadata::new("Ottawa", Some(2000)));

        // The raw table carries the same information
        let metadata = station_and_year(&raw_small_table()?);
        assert_eq!(metadata.station, "Ottawa");
        assert_eq!(metadata.year, Some(2000));
        Ok(())
    }

    #[test]
    fn test_year_falls_back_to_timestamp() -> Result<(), Box<dyn std::error::Error>> {
        let raw = df!(
            "Year" => [None::<&str>, None],
            "Date/Time" => [Some("not a date"), Some("1999-12-31")],
        )?;
        let frame = clean(&raw, &CleanOptions::default())?;
        let metadata = station_and_year(&frame);
        assert_eq!(metadata.station, "Station");
        assert_eq!(metadata.year, Some(1999));
        Ok(())
    }

    #[test]
    fn test_nothing_derivable() -> Result<(), Box<dyn std::error::Error>> {
        let raw = df!(
            "Station Name" => [None::<&str>, Some("  ")],
            "Date/Time" => ["garbage", "2000-13-45"],
        )?;
        let frame = clean(&raw, &CleanOptions::default())?;
        assert_eq!(station_and_year(&frame), StationMetadata::default());

        assert_eq!(station_and_year(&DataFrame::empty()), StationMetadata::default());
        Ok(())
    }

    #[test]
    fn test_parse_timestamp_year_formats() {
        assert_eq!(parse_timestamp_year("2000-01-05"), Some(2000));
        assert_eq!(parse_timestamp_year("2000/01/05"), Some(2000));
        assert_eq!(parse_timestamp_year("2001-02-03 04:05:06"), Some(2001));
        assert_eq!(parse_timestamp_year("2001-02-03 04:05"), Some(2001));
        assert_eq!(parse_timestamp_year("2002-02-03T04:05:06"), Some(2002));
        assert_eq!(parse_timestamp_year("01/02/2003"), None);
        assert_eq!(parse_timestamp_year(""), None);
    }
}
