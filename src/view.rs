//! What a viewer shows for one selection: heading, metric panel, month chart
//! data, the full selected record, and an optional comparison with a second day.

use crate::columns::*;
use crate::compare::{compare_field, diff_table};
use crate::format::format_value;
use crate::table::error::TableError;
use crate::table::query::{category_groups, days, has_column, month_frame, row_for};
use crate::table::reshape::to_long_form;
use crate::types::category::Category;
use crate::types::day_record::{get, DayRecord};
use crate::types::station_metadata::StationMetadata;
use polars::prelude::*;

pub const CHART_X_TITLE: &str = "Day of Month";
pub const RECORD_FIELD_COLUMN: &str = "Field";
pub const RECORD_VALUE_COLUMN: &str = "Value";

/// One labelled value of the metric panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    /// Formatted value (of Day B when comparing), or the missing glyph.
    pub value: String,
    /// Signed change from Day A; only set when comparing.
    pub delta: Option<String>,
}

/// Everything needed to draw the month chart of one category.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub axis_title: String,
    pub x_title: String,
    /// Day to mark on the chart, if one is selected and the month has rows.
    pub highlight_day: Option<u32>,
    /// Long-form (Day, Series, Value) table.
    pub series: DataFrame,
}

/// The two days being compared. Day B is shown, Day A is the baseline.
#[derive(Debug, Clone)]
pub struct ComparisonView {
    pub day_a: Option<DayRecord>,
    pub day_b: Option<DayRecord>,
    /// Side-by-side field table, present only when both days exist.
    pub diff: Option<DataFrame>,
}

impl ComparisonView {
    /// `false` while either day is missing; the viewer should ask for a complete selection.
    pub fn is_complete(&self) -> bool {
        self.day_a.is_some() && self.day_b.is_some()
    }
}

/// The result of [`crate::ClimateTable::view`].
#[derive(Debug, Clone)]
pub struct DayView {
    pub metadata: StationMetadata,
    pub title: String,
    pub month: u32,
    pub day: Option<u32>,
    /// Days available in `month`; empty means the month has no data.
    pub days: Vec<u32>,
    pub category: Category,
    pub record: Option<DayRecord>,
    /// The selected record as a `Field`/`Value` table, unnamed columns removed.
    pub record_table: Option<DataFrame>,
    pub metrics: Vec<Metric>,
    /// `None` when the table has no columns for `category`.
    pub chart: Option<ChartData>,
    pub comparison: Option<ComparisonView>,
}

struct MetricDef {
    label: &'static str,
    column: &'static str,
    decimals: usize,
}

impl MetricDef {
    const fn new(label: &'static str, column: &'static str, decimals: usize) -> Self {
        Self {
            label,
            column,
            decimals,
        }
    }
}

fn metric_defs(frame: &DataFrame, category: Category) -> Vec<MetricDef> {
    match category {
        Category::Temperature => vec![
            MetricDef::new(COL_MAX_TEMP, COL_MAX_TEMP, 1),
            MetricDef::new(COL_MIN_TEMP, COL_MIN_TEMP, 1),
            MetricDef::new(COL_MEAN_TEMP, COL_MEAN_TEMP, 1),
        ],
        Category::Precipitation => vec![
            MetricDef::new(COL_TOTAL_RAIN, COL_TOTAL_RAIN, 1),
            MetricDef::new(COL_TOTAL_PRECIP, COL_TOTAL_PRECIP, 1),
        ],
        Category::Snow => vec![
            MetricDef::new(COL_TOTAL_SNOW, COL_TOTAL_SNOW, 1),
            MetricDef::new(COL_SNOW_ON_GROUND, COL_SNOW_ON_GROUND, 1),
        ],
        Category::Wind => {
            let mut defs = vec![MetricDef::new("Max Gust Speed (km/h)", COL_GUST_SPEED, 1)];
            // Direction is a compass sector in tens of degrees, shown without decimals
            if has_column(frame, COL_GUST_DIR) {
                defs.push(MetricDef::new("Max Gust Dir (10s deg)", COL_GUST_DIR, 0));
            }
            defs
        }
    }
}

fn metric_panel(
    frame: &DataFrame,
    category: Category,
    record: Option<&DayRecord>,
    comparison: Option<&ComparisonView>,
) -> Vec<Metric> {
    metric_defs(frame, category)
        .into_iter()
        .map(|def| match comparison {
            Some(cmp) => {
                let result = compare_field(
                    cmp.day_a.as_ref(),
                    cmp.day_b.as_ref(),
                    def.column,
                    def.decimals,
                );
                Metric {
                    label: def.label.to_string(),
                    value: result.value,
                    delta: Some(result.delta),
                }
            }
            None => Metric {
                label: def.label.to_string(),
                value: format_value(get(record, def.column).as_f64(), def.decimals),
                delta: None,
            },
        })
        .collect()
}

/// Chart heading, e.g. `"Temperature for Ottawa in 2000-01"`.
pub fn chart_title(category: Category, metadata: &StationMetadata, month: u32) -> String {
    format!(
        "{} for {} in {}-{:02}",
        category,
        metadata.station,
        metadata.year_label(),
        month
    )
}

/// The fields of `record` as a two-column text table, unnamed columns removed.
pub fn record_table(record: &DayRecord) -> PolarsResult<DataFrame> {
    let (fields, values): (Vec<&str>, Vec<Option<String>>) = record
        .fields()
        .iter()
        .filter(|(name, _)| !is_unnamed_column(name))
        .map(|(name, cell)| {
            let value = (!cell.is_missing()).then(|| cell.to_string());
            (name.as_str(), value)
        })
        .unzip();
    DataFrame::new(vec![
        Column::new(RECORD_FIELD_COLUMN.into(), fields),
        Column::new(RECORD_VALUE_COLUMN.into(), values),
    ])
}

pub(crate) struct ViewRequest {
    pub month: u32,
    pub day: Option<u32>,
    pub category: Category,
    pub month_b: Option<u32>,
    pub day_b: Option<u32>,
}

pub(crate) fn build_view(
    frame: &DataFrame,
    metadata: StationMetadata,
    request: ViewRequest,
) -> Result<DayView, TableError> {
    let ViewRequest {
        month,
        day,
        category,
        month_b,
        day_b,
    } = request;

    let record = match day {
        Some(day) => row_for(frame, month, day)?,
        None => None,
    };

    let comparison = match (month_b.or(day_b.map(|_| month)), day_b) {
        (Some(compare_month), compare_day) => {
            let day_b = match compare_day {
                Some(compare_day) => row_for(frame, compare_month, compare_day)?,
                None => None,
            };
            let diff = diff_table(record.as_ref(), day_b.as_ref())?;
            Some(ComparisonView {
                day_a: record.clone(),
                day_b,
                diff,
            })
        }
        (None, _) => None,
    };

    let metrics = metric_panel(frame, category, record.as_ref(), comparison.as_ref());

    let columns = category_groups(frame)
        .get(category)
        .columns
        .clone();
    let chart = if columns.is_empty() {
        None
    } else {
        let month_rows = month_frame(frame, month)?;
        let highlight_day = day.filter(|_| month_rows.height() > 0);
        Some(ChartData {
            title: chart_title(category, &metadata, month),
            axis_title: category.axis_title().to_string(),
            x_title: CHART_X_TITLE.to_string(),
            highlight_day,
            series: to_long_form(&month_rows, columns.as_slice())?,
        })
    };

    let record_fields = record.as_ref().map(record_table).transpose()?;

    Ok(DayView {
        title: metadata.title(),
        metadata,
        month,
        day,
        days: days(frame, month)?,
        category,
        record,
        record_table: record_fields,
        metrics,
        chart,
        comparison,
    })
}
