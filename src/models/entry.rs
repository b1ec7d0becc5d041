//! Time entry model.
//!
//! A [`TimeEntry`] is one logged segment of work on a calendar date. Several
//! entries may share a date; the engine sums them per day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The ISO date format used for stored entries and CLI input.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged segment of work.
///
/// The date carries calendar precision only, so two entries compare equal by
/// day regardless of where or when they were recorded.
///
/// # Example
///
/// ```
/// use worklog::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry::new(NaiveDate::from_ymd_opt(2025, 6, 17).unwrap(), Decimal::new(75, 1))
///     .with_activity("  code review ");
///
/// assert_eq!(entry.hours, Decimal::new(75, 1));
/// assert_eq!(entry.activity_label(), Some("code review"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The calendar date the work was done on.
    pub date: NaiveDate,
    /// Hours worked, never negative.
    pub hours: Decimal,
    /// Per-entry override of the daily normal-hour threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Decimal>,
    /// Free-text description of the work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
}

impl TimeEntry {
    /// Creates an entry without threshold override or activity.
    pub fn new(date: NaiveDate, hours: Decimal) -> Self {
        Self {
            date,
            hours,
            threshold: None,
            activity: None,
        }
    }

    /// Sets the per-entry threshold override.
    pub fn with_threshold(mut self, threshold: Decimal) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Sets the activity label.
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Returns the trimmed activity, or `None` when it is missing or blank.
    pub fn activity_label(&self) -> Option<&str> {
        self.activity
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// # Example
///
/// ```
/// use worklog::models::parse_iso_date;
///
/// assert!(parse_iso_date("2025-06-23").is_ok());
/// assert!(parse_iso_date("2025-6-23").is_err());
/// assert!(parse_iso_date("2025-02-30").is_err());
/// ```
pub fn parse_iso_date(value: &str) -> EngineResult<NaiveDate> {
    let invalid = || EngineError::InvalidDate {
        value: value.to_string(),
    };

    if value.len() != 10 {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|_| invalid())
}
