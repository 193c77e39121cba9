//! Display formatting for possibly-missing numeric values.

/// The single glyph rendered wherever a value is missing.
pub const MISSING_GLYPH: &str = "—";

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Returns [`MISSING_GLYPH`] for a missing, NaN or infinite value.
///
/// # Examples
///
/// ```
/// use daily_climate::{format_value, MISSING_GLYPH};
///
/// assert_eq!(format_value(Some(3.14159), 2), "3.14");
/// assert_eq!(format_value(Some(f64::NAN), 1), MISSING_GLYPH);
/// assert_eq!(format_value(None, 1), MISSING_GLYPH);
/// ```
pub fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => MISSING_GLYPH.to_string(),
    }
}

/// Formats a signed difference, with an explicit `+` for non-negative values.
///
/// ```
/// use daily_climate::format_delta;
///
/// assert_eq!(format_delta(Some(5.0), 1), "+5.0");
/// assert_eq!(format_delta(Some(-1.25), 2), "-1.25");
/// assert_eq!(format_delta(Some(0.0), 1), "+0.0");
/// ```
pub fn format_delta(delta: Option<f64>, decimals: usize) -> String {
    match delta {
        // -0.0 compares equal to zero but would print its own sign
        Some(d) if d == 0.0 => format!("+{:.*}", decimals, 0.0),
        Some(d) if d.is_finite() && d > 0.0 => format!("+{:.*}", decimals, d),
        Some(d) if d.is_finite() => format!("{:.*}", decimals, d),
        _ => MISSING_GLYPH.to_string(),
    }
}
