//! Day classification.
//!
//! Classifies a calendar date as weekend, holiday or workday. The pure
//! [`classify`] function recomputes the holiday set on every call;
//! [`HolidayCalendar`] memoizes it per year for month-wide passes.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::holidays_for_year;

/// Classification flags for a date.
///
/// `weekend` and `holiday` are independent: a holiday on a Saturday sets
/// both. `workday` is Monday to Friday and not a holiday.
///
/// # Example
///
/// ```
/// use worklog::calendar::classify;
/// use chrono::NaiveDate;
///
/// // Midsummer Eve 2025 falls on a Monday.
/// let class = classify(NaiveDate::from_ymd_opt(2025, 6, 23).unwrap());
/// assert!(class.holiday);
/// assert!(!class.weekend);
/// assert!(!class.workday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayClass {
    /// Saturday or Sunday.
    pub weekend: bool,
    /// Public holiday.
    pub holiday: bool,
    /// Monday to Friday and not a holiday.
    pub workday: bool,
}

impl DayClass {
    fn from_flags(date: NaiveDate, holiday: bool) -> Self {
        let weekend = is_weekend(date);
        Self {
            weekend,
            holiday,
            workday: !weekend && !holiday,
        }
    }
}

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies `date` without memoization.
pub fn classify(date: NaiveDate) -> DayClass {
    let holiday = holidays_for_year(date.year()).contains(&date);
    DayClass::from_flags(date, holiday)
}

/// A holiday calendar that memoizes the holiday set of each year it sees.
///
/// The cache belongs to the instance and is only an optimization: every
/// answer equals the one [`classify`] gives. Not `Sync`; create one per
/// computation pass or per thread.
///
/// # Example
///
/// ```
/// use worklog::calendar::{classify, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new();
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// assert_eq!(calendar.classify(christmas), classify(christmas));
/// assert_eq!(calendar.cached_years(), 1);
/// ```
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    cache: RefCell<HashMap<i32, BTreeSet<NaiveDate>>>,
}

impl HolidayCalendar {
    /// Creates a calendar with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `date` is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        let year = date.year();
        if let Some(holidays) = self.cache.borrow().get(&year) {
            return holidays.contains(&date);
        }

        let holidays = holidays_for_year(year);
        let hit = holidays.contains(&date);
        self.cache.borrow_mut().insert(year, holidays);
        hit
    }

    /// Returns `true` if `date` is Monday to Friday and not a holiday.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        self.classify(date).workday
    }

    /// Classifies `date`.
    pub fn classify(&self, date: NaiveDate) -> DayClass {
        DayClass::from_flags(date, self.is_holiday(date))
    }

    /// Number of years currently memoized.
    pub fn cached_years(&self) -> usize {
        self.cache.borrow().len()
    }
}
