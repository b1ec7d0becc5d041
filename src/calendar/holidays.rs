//! Latvian public holiday calendar.
//!
//! The holiday set is fixed and depends on the year alone: a handful of
//! fixed-date holidays plus the three Easter-derived days.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::easter_sunday;

/// Region code recorded on every holiday produced by this module.
pub const HOLIDAY_REGION: &str = "LV";

/// Number of holidays in every year.
pub const HOLIDAYS_PER_YEAR: usize = 13;

/// A public holiday.
///
/// # Example
///
/// ```
/// use worklog::calendar::latvian_holidays;
///
/// let holidays = latvian_holidays(2025);
/// assert_eq!(holidays[0].name, "New Year's Day");
/// assert_eq!(holidays[0].date.to_string(), "2025-01-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The English name of the holiday.
    pub name: String,
    /// The region where the holiday applies.
    pub region: String,
}

const FIXED_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "New Year's Day"),
    (5, 1, "Labour Day"),
    (5, 4, "Restoration of Independence Day"),
    (6, 23, "Midsummer Eve"),
    (6, 24, "Midsummer Day"),
    (11, 18, "Proclamation Day"),
    (12, 24, "Christmas Eve"),
    (12, 25, "Christmas Day"),
    (12, 26, "Second Christmas Day"),
    (12, 31, "New Year's Eve"),
];

/// Returns the named holidays of `year`, ordered by date.
pub fn latvian_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| holiday(date, name))
        })
        .collect();

    if let Some(easter) = easter_sunday(year) {
        let easter_days = [
            (easter.checked_sub_days(Days::new(2)), "Good Friday"),
            (Some(easter), "Easter Sunday"),
            (easter.checked_add_days(Days::new(1)), "Easter Monday"),
        ];
        holidays.extend(
            easter_days
                .into_iter()
                .filter_map(|(date, name)| date.map(|date| holiday(date, name))),
        );
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Returns the set of holiday dates of `year`.
///
/// Pure: the same year always yields the same 13 dates.
///
/// # Example
///
/// ```
/// use worklog::calendar::holidays_for_year;
/// use chrono::NaiveDate;
///
/// let holidays = holidays_for_year(2024);
/// assert_eq!(holidays.len(), 13);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// ```
pub fn holidays_for_year(year: i32) -> BTreeSet<NaiveDate> {
    latvian_holidays(year).into_iter().map(|h| h.date).collect()
}

fn holiday(date: NaiveDate, name: &str) -> Holiday {
    Holiday {
        date,
        name: name.to_string(),
        region: HOLIDAY_REGION.to_string(),
    }
}
