//! Derived per-day and per-month results.
//!
//! These are never persisted. Every request recomputes them from the raw
//! entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{TimeEntry, YearMonth};

/// Which branch of the day split rule produced a [`DayTotals`].
///
/// # Example
///
/// ```
/// use worklog::models::SplitRule;
///
/// assert_eq!(SplitRule::NonWorkday.to_string(), "non_workday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitRule {
    /// Weekend or holiday with hours logged: everything is overtime.
    NonWorkday,
    /// Workday: hours up to the threshold are normal, the rest overtime.
    Threshold,
    /// Anything else (a non-workday with no hours): everything is overtime.
    Residual,
}

impl std::fmt::Display for SplitRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitRule::NonWorkday => write!(f, "non_workday"),
            SplitRule::Threshold => write!(f, "threshold"),
            SplitRule::Residual => write!(f, "residual"),
        }
    }
}

/// Totals for a single calendar date.
///
/// `normal + over == hours` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    /// The date these totals describe.
    pub date: NaiveDate,
    /// The entries logged on this date, in input order.
    pub rows: Vec<TimeEntry>,
    /// Sum of hours across `rows`.
    pub hours: Decimal,
    /// Hours counted against the threshold.
    pub normal: Decimal,
    /// Overtime hours.
    pub over: Decimal,
    /// The threshold that applied to this day.
    pub threshold: Decimal,
    /// Saturday or Sunday.
    pub weekend: bool,
    /// Public holiday.
    pub holiday: bool,
    /// Monday to Friday and not a holiday.
    pub workday: bool,
    /// The split rule branch that was applied.
    pub rule: SplitRule,
}

impl DayTotals {
    /// Returns `true` if the date is a weekend or a holiday.
    pub fn is_day_off(&self) -> bool {
        self.weekend || self.holiday
    }

    /// Iterates over the trimmed, non-blank activity labels of the day.
    pub fn activities(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().filter_map(TimeEntry::activity_label)
    }
}

/// Aggregated statistics for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The month summarized.
    pub month: YearMonth,
    /// Number of workdays in the month.
    pub workdays: u32,
    /// Workdays multiplied by the settings threshold.
    pub required_hours: Decimal,
    /// All hours logged in the month, unrounded.
    pub total_hours: Decimal,
    /// Sum of normal hours over `days`.
    pub normal_hours: Decimal,
    /// Sum of overtime hours over `days`.
    pub overtime_hours: Decimal,
    /// Totals for every date with at least one entry, chronologically.
    pub days: Vec<DayTotals>,
}

impl MonthSummary {
    /// Returns `true` when no entries were logged in the month.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Logged hours minus required hours. Negative when short.
    pub fn balance(&self) -> Decimal {
        self.total_hours - self.required_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_day() -> DayTotals {
        DayTotals {
            date: date(2025, 6, 21),
            rows: vec![
                TimeEntry::new(date(2025, 6, 21), dec("2")).with_activity(" deploy "),
                TimeEntry::new(date(2025, 6, 21), dec("1")),
                TimeEntry::new(date(2025, 6, 21), dec("1")).with_activity("review"),
            ],
            hours: dec("4"),
            normal: Decimal::ZERO,
            over: dec("4"),
            threshold: dec("8"),
            weekend: true,
            holiday: false,
            workday: false,
            rule: SplitRule::NonWorkday,
        }
    }

    #[test]
    fn test_activities_skip_blank_rows() {
        let day = sample_day();
        let activities: Vec<&str> = day.activities().collect();
        assert_eq!(activities, vec!["deploy", "review"]);
    }

    #[test]
    fn test_weekend_is_day_off() {
        assert!(sample_day().is_day_off());
    }

    #[test]
    fn test_month_balance() {
        let summary = MonthSummary {
            month: YearMonth::new(2025, 6).unwrap(),
            workdays: 19,
            required_hours: dec("152"),
            total_hours: dec("150.5"),
            normal_hours: dec("146.5"),
            overtime_hours: dec("4"),
            days: vec![],
        };
        assert_eq!(summary.balance(), dec("-1.5"));
        assert!(summary.is_empty());
    }

    #[test]
    fn test_split_rule_serializes_snake_case() {
        let json = serde_json::to_string(&SplitRule::NonWorkday).unwrap();
        assert_eq!(json, "\"non_workday\"");
    }
}
