//! Station identity and reporting year derived from a cleaned table.

use serde::{Deserialize, Serialize};

/// Name used when a table carries no station name.
pub const FALLBACK_STATION_NAME: &str = "Station";

/// Label shown in place of an underivable year.
pub const UNKNOWN_YEAR_LABEL: &str = "Unknown year";

/// Which station a table describes and which year it reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationMetadata {
    pub station: String,
    pub year: Option<i32>,
}

impl StationMetadata {
    pub fn new(station: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            station: station.into(),
            year,
        }
    }

    /// The year as text, or [`UNKNOWN_YEAR_LABEL`].
    pub fn year_label(&self) -> String {
        match self.year {
            Some(year) => year.to_string(),
            None => UNKNOWN_YEAR_LABEL.to_string(),
        }
    }

    /// Page heading, e.g. `"Ottawa's climate in the year 2000"`.
    pub fn title(&self) -> String {
        format!("{}'s climate in the year {}", self.station, self.year_label())
    }
}

impl Default for StationMetadata {
    fn default() -> Self {
        Self::new(FALLBACK_STATION_NAME, None)
    }
}
