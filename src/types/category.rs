//! Defines the fixed data [`Category`] vocabulary and the per-table
//! [`CategoryGroups`] mapping each category to the columns it can chart.

use crate::columns::*;
use crate::error::ClimateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed groupings of related measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Max, min and mean daily temperature.
    Temperature,
    /// Rain and total precipitation.
    Precipitation,
    /// Snowfall and snow on the ground.
    Snow,
    /// Speed of the maximum gust.
    Wind,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Precipitation,
        Category::Snow,
        Category::Wind,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature",
            Category::Precipitation => "Precipitation",
            Category::Snow => "Snow",
            Category::Wind => "Wind",
        }
    }

    /// Title for the value axis of this category's chart.
    pub fn axis_title(&self) -> &'static str {
        match self {
            Category::Temperature => "Temperature (°C)",
            Category::Precipitation => "Precipitation (mm)",
            Category::Snow => "Snow (cm)",
            Category::Wind => "Wind (km/h)",
        }
    }

    /// The columns that may hold this category's series, in chart order.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            Category::Temperature => &[COL_MAX_TEMP, COL_MIN_TEMP, COL_MEAN_TEMP],
            Category::Precipitation => &[COL_TOTAL_RAIN, COL_TOTAL_PRECIP],
            Category::Snow => &[COL_TOTAL_SNOW, COL_SNOW_ON_GROUND],
            Category::Wind => &[COL_GUST_SPEED],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a category label. A leading pictogram ("🌡️ Temperature") is ignored.
///
/// # Examples
///
/// ```
/// use daily_climate::Category;
///
/// assert_eq!("Snow".parse::<Category>().unwrap(), Category::Snow);
/// assert_eq!("💨 Wind".parse::<Category>().unwrap(), Category::Wind);
/// assert!("Humidity".parse::<Category>().is_err());
/// assert!("Max Temperature".parse::<Category>().is_err());
/// ```
impl FromStr for Category {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let label = match trimmed.split_once(char::is_whitespace) {
            Some((pictogram, rest)) if !pictogram.chars().any(char::is_alphanumeric) => {
                rest.trim_start()
            }
            _ => trimmed,
        };
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or_else(|| ClimateError::UnknownCategory(s.to_string()))
    }
}

/// The columns of one category that actually exist in a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    /// Present candidate columns, in the candidate list's order. May be empty.
    pub columns: Vec<String>,
    pub axis_title: &'static str,
}

impl CategoryGroup {
    /// Keeps the candidates of `category` for which `has_column` holds.
    pub fn filtered(category: Category, has_column: impl Fn(&str) -> bool) -> Self {
        Self {
            category,
            columns: category
                .candidates()
                .iter()
                .filter(|name| has_column(name))
                .map(|name| name.to_string())
                .collect(),
            axis_title: category.axis_title(),
        }
    }

    /// `true` when the table has no data for this category.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One [`CategoryGroup`] for every [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroups {
    pub temperature: CategoryGroup,
    pub precipitation: CategoryGroup,
    pub snow: CategoryGroup,
    pub wind: CategoryGroup,
}

impl CategoryGroups {
    pub fn new(has_column: impl Fn(&str) -> bool) -> Self {
        Self {
            temperature: CategoryGroup::filtered(Category::Temperature, &has_column),
            precipitation: CategoryGroup::filtered(Category::Precipitation, &has_column),
            snow: CategoryGroup::filtered(Category::Snow, &has_column),
            wind: CategoryGroup::filtered(Category::Wind, &has_column),
        }
    }

    pub fn get(&self, category: Category) -> &CategoryGroup {
        match category {
            Category::Temperature => &self.temperature,
            Category::Precipitation => &self.precipitation,
            Category::Snow => &self.snow,
            Category::Wind => &self.wind,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        Category::ALL.into_iter().map(move |category| self.get(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() -> Result<(), ClimateError> {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>()?, category);
            assert_eq!(category.to_string(), category.label());
        }
        assert_eq!("🌡️ Temperature".parse::<Category>()?, Category::Temperature);
        assert_eq!("❄️ Snow".parse::<Category>()?, Category::Snow);
        Ok(())
    }

    #[test]
    fn test_parse_unknown_label_fails_loudly() {
        let err = "Humidity".parse::<Category>().unwrap_err();
        assert!(matches!(err, ClimateError::UnknownCategory(ref s) if s == "Humidity"));
        assert!("".parse::<Category>().is_err());
        assert!("temperature".parse::<Category>().is_err());
    }

    #[test]
    fn test_parse_rejects_extra_words() {
        for label in ["Humidity Snow", "Max Temperature", "Not Wind", "Snow Snow", "🌡️ Max Temperature", "❄️"] {
            assert!(
                matches!(label.parse::<Category>(), Err(ClimateError::UnknownCategory(ref s)) if s == label),
                "{label} should not parse"
            );
        }
        assert_eq!("  💨   Wind ".parse::<Category>().ok(), Some(Category::Wind));
    }

    #[test]
    fn test_groups_preserve_candidate_order() {
        let present = [COL_MEAN_TEMP, COL_MAX_TEMP, COL_TOTAL_PRECIP];
        let groups = CategoryGroups::new(|name| present.contains(&name));

        assert_eq!(groups.temperature.columns, [COL_MAX_TEMP, COL_MEAN_TEMP]);
        assert_eq!(groups.precipitation.columns, [COL_TOTAL_PRECIP]);
        assert!(groups.snow.is_empty());
        assert!(groups.get(Category::Wind).is_empty());
        assert_eq!(groups.get(Category::Snow).axis_title, "Snow (cm)");
        assert_eq!(groups.iter().count(), 4);
    }
}
