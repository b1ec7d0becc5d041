//! Classification-to-style mapping for day rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DayTotals;

/// Colour of the hours chip shown next to a day.
///
/// # Example
///
/// ```
/// use worklog::report::ChipStyle;
///
/// assert_eq!(ChipStyle::Green.css_class(), "chip-green");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipStyle {
    /// Workday below the threshold.
    Blue,
    /// Workday exactly at the threshold.
    Green,
    /// Overtime: workday above the threshold, or hours on a day off.
    Orange,
    /// Day off with nothing logged.
    Gray,
}

impl ChipStyle {
    /// Picks the style for a day.
    ///
    /// Days off are orange when any hours were logged and gray otherwise.
    /// Workdays compare the logged hours to the day's effective threshold.
    pub fn for_day(day: &DayTotals) -> Self {
        if day.is_day_off() {
            return if day.hours > Decimal::ZERO {
                ChipStyle::Orange
            } else {
                ChipStyle::Gray
            };
        }

        match day.hours.cmp(&day.threshold) {
            std::cmp::Ordering::Less => ChipStyle::Blue,
            std::cmp::Ordering::Equal => ChipStyle::Green,
            std::cmp::Ordering::Greater => ChipStyle::Orange,
        }
    }

    /// The CSS class used by the HTML report.
    pub fn css_class(&self) -> &'static str {
        match self {
            ChipStyle::Blue => "chip-blue",
            ChipStyle::Green => "chip-green",
            ChipStyle::Orange => "chip-orange",
            ChipStyle::Gray => "chip-gray",
        }
    }
}
