//! Plain-text report.

use super::{EMPTY_MONTH_MESSAGE, ReportOptions, day_label, day_meta, header_lines};
use crate::models::MonthSummary;

/// Renders `summary` as plain text.
///
/// # Example
///
/// ```
/// use worklog::calculation::summarize_month;
/// use worklog::calendar::HolidayCalendar;
/// use worklog::models::{Settings, YearMonth};
/// use worklog::report::{render_text, ReportOptions};
///
/// let month = YearMonth::new(2025, 2).unwrap();
/// let summary = summarize_month(&[], month, &Settings::default(), &HolidayCalendar::new());
/// let text = render_text(&summary, &ReportOptions::default());
///
/// assert!(text.starts_with("2025. gada Februāris\n"));
/// assert!(text.contains("Šim mēnesim nav ierakstu."));
/// ```
pub fn render_text(summary: &MonthSummary, options: &ReportOptions) -> String {
    let mut lines: Vec<String> = header_lines(summary, options).into();
    lines.push(String::new());

    if summary.is_empty() {
        lines.push(EMPTY_MONTH_MESSAGE.to_string());
    }

    for day in &summary.days {
        lines.push(day_label(day.date));
        lines.push(format!("  {}", day_meta(day, options)));

        let activities: Vec<&str> = day.activities().collect();
        if !activities.is_empty() {
            lines.push(format!("  {}", activities.join("; ")));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
