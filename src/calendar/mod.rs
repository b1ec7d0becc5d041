//! Calendar engine.
//!
//! Computes the Latvian public holidays of a year and classifies dates as
//! weekend, holiday or workday.

mod classification;
mod easter;
mod holidays;

pub use classification::{DayClass, HolidayCalendar, classify, is_weekend};
pub use easter::easter_sunday;
pub use holidays::{
    HOLIDAY_REGION, HOLIDAYS_PER_YEAR, Holiday, holidays_for_year, latvian_holidays,
};
