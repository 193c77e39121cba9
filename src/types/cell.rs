//! Defines [`Cell`], a single value of a cleaned row.

use crate::table::cleaner::parse_numeric_cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value taken from a row of a cleaned table.
///
/// Cleaned tables only hold text columns and numeric columns, so a cell is either
/// text, a finite number, or missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// A value from a numeric column.
    Number(f64),
    /// A value from a text column (station name, timestamp).
    Text(String),
    /// No usable data.
    #[default]
    Missing,
}

impl Cell {
    /// Builds a cell from an optional number, treating non-finite values as missing.
    pub fn from_number(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Missing,
        }
    }

    /// Builds a cell from optional text, treating blank text as missing.
    pub fn from_text(value: Option<&str>) -> Self {
        match value {
            Some(s) if !s.trim().is_empty() => Cell::Text(s.to_string()),
            _ => Cell::Missing,
        }
    }

    /// The numeric value of a [`Cell::Number`]; `None` for text and missing cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Like [`Cell::as_f64`], but text that reads as a number also counts.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => parse_numeric_cell(s),
            Cell::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

/// Renders numbers in their shortest form with at least one decimal, text as-is
/// and missing cells as an empty string.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{:?}", v),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Missing => Ok(()),
        }
    }
}
