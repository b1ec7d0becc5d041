//! Core data models for the work-log engine.
//!
//! Stored data is loosely typed; the store readers coerce it into these types
//! so the engine only ever works with well-formed values.

mod entry;
mod settings;
mod summary;
mod year_month;

pub use entry::{ISO_DATE_FORMAT, TimeEntry, parse_iso_date};
pub use settings::{DEFAULT_THRESHOLD, Settings};
pub use summary::{DayTotals, MonthSummary, SplitRule};
pub use year_month::YearMonth;
