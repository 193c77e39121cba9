//! Column names of the station daily export that the query layer relies on.

// Identity / time
pub const COL_STATION_NAME: &str = "Station Name";
pub const COL_DATE_TIME: &str = "Date/Time";
pub const COL_YEAR: &str = "Year";
pub const COL_MONTH: &str = "Month";
pub const COL_DAY: &str = "Day";

// Temperature
pub const COL_MAX_TEMP: &str = "Max Temp (°C)";
pub const COL_MIN_TEMP: &str = "Min Temp (°C)";
pub const COL_MEAN_TEMP: &str = "Mean Temp (°C)";

// Precipitation
pub const COL_TOTAL_RAIN: &str = "Total Rain (mm)";
pub const COL_TOTAL_PRECIP: &str = "Total Precip (mm)";

// Snow
pub const COL_TOTAL_SNOW: &str = "Total Snow (cm)";
pub const COL_SNOW_ON_GROUND: &str = "Snow on Grnd (cm)";

// Wind
pub const COL_GUST_SPEED: &str = "Spd of Max Gust (km/h)";
pub const COL_GUST_DIR: &str = "Dir of Max Gust (10s deg)";

/// Marker for columns invented by the table reader for blank headers.
pub const UNNAMED_COLUMN_MARKER: &str = "Unnamed:";

/// Returns `true` for columns that only exist because of how the file was read.
pub fn is_unnamed_column(name: &str) -> bool {
    name.trim().is_empty() || name.contains(UNNAMED_COLUMN_MARKER)
}
