//! Clean, query and reshape a single year of daily climate-station records.
//!
//! The crate turns a raw, messy table (as read from a station CSV export) into a
//! typed [`ClimateTable`], then answers the questions a day-by-day viewer asks:
//! which months and days exist, what was recorded on a given date, which columns
//! belong to a [`Category`], how a month looks in long (Day, Series, Value) form,
//! and how two days compare.
//!
//! ```no_run
//! use daily_climate::{Category, ClimateTable};
//!
//! # fn main() -> Result<(), daily_climate::ClimateError> {
//! let table = ClimateTable::load_csv("en_climate_daily_ON_6105976_2000_P1D.csv")?;
//! let view = table
//!     .view()
//!     .month(1)
//!     .day(15)
//!     .category(Category::Temperature)
//!     .call()?;
//!
//! println!("{}", view.title);
//! for metric in &view.metrics {
//!     println!("{}: {}", metric.label, metric.value);
//! }
//! # Ok(())
//! # }
//! ```

mod climate_table;
mod columns;
mod compare;
mod error;
mod format;
mod table;
mod types;
mod view;

#[cfg(test)]
mod test_fixtures;

pub use climate_table::ClimateTable;
pub use error::ClimateError;
pub use table::error::TableError;

pub use columns::*;
pub use compare::{compare_field, diff_table};
pub use format::{format_delta, format_value, MISSING_GLYPH};

pub use table::cleaner::{clean, parse_numeric_cell, CleanOptions};
pub use table::loader::read_raw_csv;
pub use table::metadata::station_and_year;
pub use table::query::{category_groups, days, month_frame, months, row_for};
pub use table::reshape::{to_long_form, DAY_COLUMN, SERIES_COLUMN, VALUE_COLUMN};

pub use types::category::{Category, CategoryGroup, CategoryGroups};
pub use types::cell::Cell;
pub use types::comparison::FieldComparison;
pub use types::day_record::{get, get_or, DayRecord};
pub use types::station_metadata::{StationMetadata, FALLBACK_STATION_NAME, UNKNOWN_YEAR_LABEL};

pub use view::{chart_title, record_table, ChartData, ComparisonView, DayView, Metric};
