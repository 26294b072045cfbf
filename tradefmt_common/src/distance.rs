//! Distances: numeric offsets with an optional unit, as typed in order and alert settings.
//!
//! `"1,5"` is a plain offset, `"2 %"` a percentage and `"3 +"` a whole number of
//! price ticks. [`parse_distance`] and [`distance_to_string`] round-trip up to the
//! display precision.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::locale::{NumberFormat, NumberFormatOptions, number_text};
use crate::parse::{clean_numeric, parse_float_prefix};

/// Unit of a distance.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
pub enum DistanceUnit {
    /// Plain number.
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Plain,
    /// Percentage of the reference price.
    #[serde(rename = "%")]
    #[strum(serialize = "%")]
    Percent,
    /// Whole number of ticks.
    #[serde(rename = "+")]
    #[strum(serialize = "+")]
    Plus,
}

/// A parsed distance. `value` is `None` when the text was not numeric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Numeric value; whole for [`DistanceUnit::Plus`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Unit of the value.
    #[serde(default)]
    pub unit: DistanceUnit,
}

impl Distance {
    /// Creates a distance, truncating the value for [`DistanceUnit::Plus`].
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        let value = match unit {
            DistanceUnit::Plus => value.trunc(),
            _ => value,
        };
        Distance {
            value: Some(value),
            unit,
        }
    }

    /// Returns `true` when no value was parsed.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Parses typed text such as `"1,5"`, `"2 %"` or `"3 +"`.
///
/// Non-numeric text gives an empty distance.
pub fn parse_distance(text: &str) -> Distance {
    let text = text.trim();
    let unit = if text.ends_with('%') {
        DistanceUnit::Percent
    } else if text.ends_with('+') {
        DistanceUnit::Plus
    } else {
        DistanceUnit::Plain
    };

    let value = parse_float_prefix(&clean_numeric(text));
    if value.is_nan() {
        return Distance::default();
    }

    Distance::new(value, unit)
}

/// Renders a distance back to text; an empty distance renders as `""`.
pub fn distance_to_string(distance: &Distance) -> String {
    let Some(value) = distance.value else {
        return String::new();
    };

    match distance.unit {
        DistanceUnit::Percent => {
            NumberFormat::new(&NumberFormatOptions::percent().max_fraction_digits(2))
                .format(value / 100.0)
        }
        DistanceUnit::Plus => format!("{} +", number_text(value.trunc())),
        DistanceUnit::Plain => NumberFormat::new(&NumberFormatOptions::decimal()).format(value),
    }
}
