//! Contains [`ClimateTable`], the cleaned, immutable table every query runs against.

use crate::error::ClimateError;
use crate::table::cleaner::{clean, CleanOptions};
use crate::table::loader::read_raw_csv;
use crate::table::metadata::station_and_year;
use crate::table::query::{category_groups, days, has_column, month_frame, months, row_for};
use crate::table::reshape::to_long_form;
use crate::types::category::{Category, CategoryGroups};
use crate::types::day_record::DayRecord;
use crate::types::station_metadata::StationMetadata;
use crate::view::{build_view, DayView, ViewRequest};
use bon::bon;
use polars::prelude::DataFrame;
use std::path::Path;

/// A cleaned table holding one station's daily records for one year.
///
/// A `ClimateTable` can only be built by cleaning a raw table, so every column
/// is either text (`Station Name`, `Date/Time`) or a nullable `Float64`. The
/// table is never modified; each query returns new values.
///
/// # Examples
///
/// ```
/// use daily_climate::{Category, ClimateTable};
/// use polars::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let raw = df!(
///     "Station Name" => ["Ottawa", "Ottawa"],
///     "Month" => ["1", "1"],
///     "Day" => ["1", "2"],
///     "Max Temp (°C)" => ["-5.0", "—"],
///     "Max Temp Flag" => ["", "M"],
/// )?;
/// let table = ClimateTable::from_raw(&raw)?;
///
/// assert_eq!(table.months()?, [1]);
/// assert_eq!(table.days(1)?, [1, 2]);
/// assert!(table.row_for(1, 3)?.is_none());
///
/// let plot = table.plot_series(1, Category::Temperature)?;
/// assert_eq!(plot.height(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClimateTable {
    frame: DataFrame,
}

#[bon]
impl ClimateTable {
    /// Cleans `raw` with the default [`CleanOptions`].
    pub fn from_raw(raw: &DataFrame) -> Result<Self, ClimateError> {
        Self::from_raw_with(raw, &CleanOptions::default())
    }

    /// Cleans `raw` with custom options.
    pub fn from_raw_with(raw: &DataFrame, options: &CleanOptions) -> Result<Self, ClimateError> {
        Ok(Self {
            frame: clean(raw, options)?,
        })
    }

    /// Reads a station CSV export and cleans it with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Table`] if the file is missing or cannot be parsed.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, ClimateError> {
        let raw = read_raw_csv(path)?;
        Self::from_raw(&raw)
    }

    /// The cleaned frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn has_column(&self, name: &str) -> bool {
        has_column(&self.frame, name)
    }

    /// Station name and report year.
    pub fn metadata(&self) -> StationMetadata {
        station_and_year(&self.frame)
    }

    /// Distinct months with data, ascending.
    pub fn months(&self) -> Result<Vec<u32>, ClimateError> {
        Ok(months(&self.frame)?)
    }

    /// Distinct days with data in `month`, ascending; empty for an unknown month.
    pub fn days(&self, month: u32) -> Result<Vec<u32>, ClimateError> {
        Ok(days(&self.frame, month)?)
    }

    /// The record for (`month`, `day`), or `None` when no row matches.
    pub fn row_for(&self, month: u32, day: u32) -> Result<Option<DayRecord>, ClimateError> {
        Ok(row_for(&self.frame, month, day)?)
    }

    /// The rows of `month`, ordered by day.
    pub fn month_frame(&self, month: u32) -> Result<DataFrame, ClimateError> {
        Ok(month_frame(&self.frame, month)?)
    }

    pub fn category_groups(&self) -> CategoryGroups {
        category_groups(&self.frame)
    }

    /// Long-form (Day, Series, Value) table of `category` for `month`.
    ///
    /// Has zero rows when the table holds no columns for `category`.
    pub fn plot_series(&self, month: u32, category: Category) -> Result<DataFrame, ClimateError> {
        let groups = self.category_groups();
        let month_rows = self.month_frame(month)?;
        Ok(to_long_form(&month_rows, groups.get(category).columns.as_slice())?)
    }

    /// Builds the [`DayView`] for a selection.
    ///
    /// `month`/`day` select the day shown (Day A when comparing). Giving
    /// `month_b` and/or `day_b` switches on comparison mode: Day B is
    /// (`month_b` or `month`, `day_b`), its values fill the metric panel and each
    /// metric carries the signed change from Day A.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use daily_climate::{Category, ClimateTable, ClimateError};
    /// # fn main() -> Result<(), ClimateError> {
    /// let table = ClimateTable::load_csv("climate_daily.csv")?;
    /// let view = table
    ///     .view()
    ///     .month(1)
    ///     .day(1)
    ///     .category(Category::Snow)
    ///     .month_b(2)
    ///     .day_b(1)
    ///     .call()?;
    ///
    /// for metric in &view.metrics {
    ///     println!("{}: {} ({:?})", metric.label, metric.value, metric.delta);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub fn view(
        &self,
        month: u32,
        day: Option<u32>,
        category: Category,
        month_b: Option<u32>,
        day_b: Option<u32>,
    ) -> Result<DayView, ClimateError> {
        let request = ViewRequest {
            month,
            day,
            category,
            month_b,
            day_b,
        };
        Ok(build_view(&self.frame, self.metadata(), request)?)
    }
}
