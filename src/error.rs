use crate::table::error::TableError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error(transparent)]
    Table(#[from] TableError),

    /// A category label outside the fixed vocabulary. This is a caller bug, not messy data.
    #[error("Unknown data category '{0}' (expected Temperature, Precipitation, Snow or Wind)")]
    UnknownCategory(String),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
