//! Per-day hour accounting.
//!
//! Splits the hours logged on a date into normal and overtime portions. Any
//! hours on a weekend or holiday are overtime; on a workday, hours beyond the
//! threshold are overtime.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{DayClass, HolidayCalendar};
use crate::models::{DayTotals, Settings, SplitRule, TimeEntry};

/// The normal/overtime split of a day's hours.
///
/// # Example
///
/// ```
/// use worklog::calculation::HourSplit;
/// use worklog::models::SplitRule;
/// use rust_decimal::Decimal;
///
/// let split = HourSplit {
///     normal: Decimal::from(8),
///     over: Decimal::from(2),
///     rule: SplitRule::Threshold,
/// };
/// assert_eq!(split.normal + split.over, Decimal::from(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSplit {
    /// Hours counted against the threshold.
    pub normal: Decimal,
    /// Overtime hours.
    pub over: Decimal,
    /// The rule branch that produced the split.
    pub rule: SplitRule,
}

/// Splits `hours` into normal and overtime hours for a day of class `class`.
///
/// Rules, in priority order:
/// 1. weekend or holiday with hours logged: all overtime
/// 2. workday: normal up to `threshold`, the excess is overtime
/// 3. otherwise: all overtime (a day off with nothing logged splits to zero)
///
/// # Examples
///
/// ## Long workday
///
/// ```
/// use worklog::calculation::split_hours;
/// use worklog::calendar::DayClass;
/// use rust_decimal::Decimal;
///
/// let workday = DayClass { weekend: false, holiday: false, workday: true };
/// let split = split_hours(Decimal::from(10), Decimal::from(8), workday);
/// assert_eq!(split.normal, Decimal::from(8));
/// assert_eq!(split.over, Decimal::from(2));
/// ```
///
/// ## Holiday
///
/// ```
/// use worklog::calculation::split_hours;
/// use worklog::calendar::DayClass;
/// use rust_decimal::Decimal;
///
/// let holiday = DayClass { weekend: false, holiday: true, workday: false };
/// let split = split_hours(Decimal::from(4), Decimal::from(8), holiday);
/// assert_eq!(split.normal, Decimal::ZERO);
/// assert_eq!(split.over, Decimal::from(4));
/// ```
pub fn split_hours(hours: Decimal, threshold: Decimal, class: DayClass) -> HourSplit {
    if (class.weekend || class.holiday) && hours > Decimal::ZERO {
        HourSplit {
            normal: Decimal::ZERO,
            over: hours,
            rule: SplitRule::NonWorkday,
        }
    } else if class.workday {
        HourSplit {
            normal: hours.min(threshold),
            over: (hours - threshold).max(Decimal::ZERO),
            rule: SplitRule::Threshold,
        }
    } else {
        HourSplit {
            normal: Decimal::ZERO,
            over: hours,
            rule: SplitRule::Residual,
        }
    }
}

/// Computes the totals for `date` from the full entry list.
///
/// The threshold is the first matching entry's override, falling back to
/// `settings.threshold`.
///
/// # Example
///
/// ```
/// use worklog::calculation::day_totals;
/// use worklog::calendar::HolidayCalendar;
/// use worklog::models::{Settings, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tuesday = NaiveDate::from_ymd_opt(2025, 6, 17).unwrap();
/// let entries = vec![
///     TimeEntry::new(tuesday, Decimal::from(6)),
///     TimeEntry::new(tuesday, Decimal::from(4)),
/// ];
///
/// let totals = day_totals(&entries, tuesday, &Settings::default(), &HolidayCalendar::new());
/// assert_eq!(totals.hours, Decimal::from(10));
/// assert_eq!(totals.normal, Decimal::from(8));
/// assert_eq!(totals.over, Decimal::from(2));
/// assert_eq!(totals.rows.len(), 2);
/// ```
pub fn day_totals(
    entries: &[TimeEntry],
    date: NaiveDate,
    settings: &Settings,
    calendar: &HolidayCalendar,
) -> DayTotals {
    let rows: Vec<TimeEntry> = entries.iter().filter(|e| e.date == date).cloned().collect();
    let hours: Decimal = rows.iter().map(|r| r.hours).sum();
    let threshold = rows
        .first()
        .and_then(|r| r.threshold)
        .unwrap_or(settings.threshold);

    let class = calendar.classify(date);
    let split = split_hours(hours, threshold, class);

    debug!(
        date = %date,
        rows = rows.len(),
        hours = %hours,
        threshold = %threshold,
        normal = %split.normal,
        over = %split.over,
        rule = %split.rule,
        "Computed day totals"
    );

    DayTotals {
        date,
        rows,
        hours,
        normal: split.normal,
        over: split.over,
        threshold,
        weekend: class.weekend,
        holiday: class.holiday,
        workday: class.workday,
        rule: split.rule,
    }
}
