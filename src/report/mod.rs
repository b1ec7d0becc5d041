//! Printable monthly reports.
//!
//! Turns a [`MonthSummary`] into display text in the fixed `lv-LV` locale,
//! either as plain text or as a standalone printable HTML page. Rounding to
//! display precision happens only here; the engine values stay exact.

mod format;
mod html;
mod style;
mod text;

use serde::{Deserialize, Serialize};

use crate::models::{DayTotals, MonthSummary};

pub use format::{
    capitalize, day_label, escape_html, format_number, format_plain, month_name, month_title,
    weekday_short,
};
pub use html::render_html;
pub use style::ChipStyle;
pub use text::render_text;

/// Shown instead of day rows when the month has no entries.
pub const EMPTY_MONTH_MESSAGE: &str = "Šim mēnesim nav ierakstu.";

/// Separator between the parts of a day's detail line.
const META_SEPARATOR: &str = " · ";

/// Display precision for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Decimals used for the month's total hours.
    pub total_decimals: u32,
    /// Decimals used for per-day hours.
    pub day_decimals: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            total_decimals: 1,
            day_decimals: 2,
        }
    }
}

/// The three header lines: title, targets, logged total.
fn header_lines(summary: &MonthSummary, options: &ReportOptions) -> [String; 3] {
    let name = capitalize(month_name(summary.month.month()));
    [
        month_title(summary.month),
        format!(
            "{name} kopā ir {} darba dienas un {} obligātās darba stundas.",
            summary.workdays,
            format_plain(summary.required_hours)
        ),
        format!(
            "{name} kopsummā ir nostrādātas {} stundas.",
            format_number(summary.total_hours, options.total_decimals)
        ),
    ]
}

/// The detail line of a day: entry count, hours, normal and overtime.
fn day_meta(day: &DayTotals, options: &ReportOptions) -> String {
    let dp = options.day_decimals;
    [
        format!("{} ieraksti", day.rows.len()),
        format!("{} h", format_number(day.hours, dp)),
        format!("Obligātās {} h", format_number(day.normal, dp)),
        format!("Virsst. {} h", format_number(day.over, dp)),
    ]
    .join(META_SEPARATOR)
}
