//! Calendar month selector.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// A calendar month, written `YYYY-MM`.
///
/// Internally the first day of the month, so every `YearMonth` is a valid
/// chrono date and day arithmetic never fails.
///
/// # Example
///
/// ```
/// use worklog::models::YearMonth;
///
/// let june: YearMonth = "2025-06".parse().unwrap();
/// assert_eq!(june.year(), 2025);
/// assert_eq!(june.month(), 6);
/// assert_eq!(june.days().count(), 30);
/// assert!("2025-6".parse::<YearMonth>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Creates a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Returns the current month in local time.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    /// Parses a month selector, falling back to the current month when the
    /// input is missing or not of the form `YYYY-MM`.
    pub fn parse_or_current(input: Option<&str>) -> Self {
        match input {
            Some(value) => value.parse().unwrap_or_else(|_| {
                let current = Self::current();
                warn!(input = %value, fallback = %current, "Invalid month selector, using current month");
                current
            }),
            None => Self::current(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first)
    }

    /// Iterates over every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let month = self.month();
        self.first
            .iter_days()
            .take_while(move |day| day.month() == month)
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    fn from_str(value: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth {
            value: value.to_string(),
        };

        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || b.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }

        let year: i32 = value[..4].parse().map_err(|_| invalid())?;
        let month: u32 = value[5..].parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_month() {
        let month: YearMonth = "2025-02".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "2025-02");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for value in ["", "2025", "2025-1", "2025-13", "2025-00", "25-06", "2025/06", "2025-06-01", "+202-06"] {
            assert!(value.parse::<YearMonth>().is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_first_and_last_day() {
        let month = YearMonth::new(2024, 2).unwrap();
        assert_eq!(month.first_day(), date(2024, 2, 1));
        assert_eq!(month.last_day(), date(2024, 2, 29));
    }

    #[test]
    fn test_days_cover_whole_month() {
        let month = YearMonth::new(2025, 12).unwrap();
        let days: Vec<NaiveDate> = month.days().collect();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], date(2025, 12, 1));
        assert_eq!(days[30], date(2025, 12, 31));
    }

    #[test]
    fn test_contains() {
        let month = YearMonth::new(2025, 6).unwrap();
        assert!(month.contains(date(2025, 6, 1)));
        assert!(month.contains(date(2025, 6, 30)));
        assert!(!month.contains(date(2025, 7, 1)));
        assert!(!month.contains(date(2024, 6, 15)));
    }

    #[test]
    fn test_of_date() {
        assert_eq!(YearMonth::of(date(2025, 6, 23)), YearMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_new_rejects_month_out_of_range() {
        assert!(YearMonth::new(2025, 0).is_none());
        assert!(YearMonth::new(2025, 13).is_none());
    }

    #[test]
    fn test_parse_or_current_uses_valid_input() {
        assert_eq!(
            YearMonth::parse_or_current(Some("2025-06")),
            YearMonth::new(2025, 6).unwrap()
        );
    }

    #[test]
    fn test_parse_or_current_falls_back() {
        assert_eq!(YearMonth::parse_or_current(Some("June")), YearMonth::current());
        assert_eq!(YearMonth::parse_or_current(None), YearMonth::current());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let month = YearMonth::new(2025, 6).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2025-06\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, month);
        assert!(serde_json::from_str::<YearMonth>("\"2025-13\"").is_err());
    }
}
