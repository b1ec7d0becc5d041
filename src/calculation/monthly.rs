//! Month-level aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::HolidayCalendar;
use crate::models::{DEFAULT_THRESHOLD, MonthSummary, Settings, TimeEntry, YearMonth};

use super::day_totals;

/// Counts the workdays (Monday to Friday, not a holiday) in `month`.
///
/// # Example
///
/// ```
/// use worklog::calculation::count_workdays_in_month;
/// use worklog::calendar::HolidayCalendar;
/// use worklog::models::YearMonth;
///
/// // June 2025: 21 weekdays, minus Midsummer Eve and Midsummer Day.
/// let june = YearMonth::new(2025, 6).unwrap();
/// assert_eq!(count_workdays_in_month(june, &HolidayCalendar::new()), 19);
/// ```
pub fn count_workdays_in_month(month: YearMonth, calendar: &HolidayCalendar) -> u32 {
    month.days().filter(|&day| calendar.is_workday(day)).count() as u32
}

/// Required hours for `month`: workdays times the settings threshold.
///
/// A zero threshold counts as the default of 8 here, while the day split
/// still uses it as is.
pub fn required_hours_for_month(
    month: YearMonth,
    settings: &Settings,
    calendar: &HolidayCalendar,
) -> Decimal {
    let threshold = if settings.threshold > Decimal::ZERO {
        settings.threshold
    } else {
        DEFAULT_THRESHOLD
    };
    Decimal::from(count_workdays_in_month(month, calendar)) * threshold
}

/// Sum of the hours of every entry dated within `month`.
///
/// The result is exact; rounding is left to the presentation layer.
pub fn total_hours_for_month(entries: &[TimeEntry], month: YearMonth) -> Decimal {
    entries
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.hours)
        .sum()
}

/// Groups the entries of `month` by date.
///
/// Entries keep their relative input order within each day. Keys iterate in
/// chronological order.
///
/// # Example
///
/// ```
/// use worklog::calculation::group_by_day;
/// use worklog::models::{TimeEntry, YearMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
/// let entries = vec![
///     TimeEntry::new(d(18), Decimal::from(2)),
///     TimeEntry::new(d(17), Decimal::from(3)),
///     TimeEntry::new(d(18), Decimal::from(1)),
/// ];
///
/// let groups = group_by_day(&entries, YearMonth::new(2025, 6).unwrap());
/// let days: Vec<_> = groups.keys().copied().collect();
/// assert_eq!(days, vec![d(17), d(18)]);
/// assert_eq!(groups[&d(18)][1].hours, Decimal::from(1));
/// ```
pub fn group_by_day(entries: &[TimeEntry], month: YearMonth) -> BTreeMap<NaiveDate, Vec<TimeEntry>> {
    let mut groups: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| month.contains(e.date)) {
        groups.entry(entry.date).or_default().push(entry.clone());
    }
    groups
}

/// Builds the full summary of `month`: targets, totals and one
/// [`DayTotals`](crate::models::DayTotals) per date that has entries.
///
/// # Example
///
/// ```
/// use worklog::calculation::summarize_month;
/// use worklog::calendar::HolidayCalendar;
/// use worklog::models::{Settings, TimeEntry, YearMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
/// let entries = vec![
///     TimeEntry::new(d(17), Decimal::from(10)),
///     TimeEntry::new(d(23), Decimal::from(4)),
/// ];
///
/// let june = YearMonth::new(2025, 6).unwrap();
/// let summary = summarize_month(&entries, june, &Settings::default(), &HolidayCalendar::new());
/// assert_eq!(summary.workdays, 19);
/// assert_eq!(summary.required_hours, Decimal::from(152));
/// assert_eq!(summary.total_hours, Decimal::from(14));
/// assert_eq!(summary.normal_hours, Decimal::from(8));
/// assert_eq!(summary.overtime_hours, Decimal::from(6));
/// assert_eq!(summary.days.len(), 2);
/// ```
pub fn summarize_month(
    entries: &[TimeEntry],
    month: YearMonth,
    settings: &Settings,
    calendar: &HolidayCalendar,
) -> MonthSummary {
    let workdays = count_workdays_in_month(month, calendar);
    let required_hours = required_hours_for_month(month, settings, calendar);
    let total_hours = total_hours_for_month(entries, month);

    let days: Vec<_> = group_by_day(entries, month)
        .into_iter()
        .map(|(date, rows)| day_totals(&rows, date, settings, calendar))
        .collect();

    let normal_hours: Decimal = days.iter().map(|d| d.normal).sum();
    let overtime_hours: Decimal = days.iter().map(|d| d.over).sum();

    debug!(
        month = %month,
        workdays,
        required_hours = %required_hours,
        total_hours = %total_hours,
        days = days.len(),
        "Summarized month"
    );

    MonthSummary {
        month,
        workdays,
        required_hours,
        total_hours,
        normal_hours,
        overtime_hours,
        days,
    }
}
