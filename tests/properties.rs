//! Property tests for the calendar and accounting engines.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use worklog::calculation::{day_totals, required_hours_for_month, total_hours_for_month};
use worklog::calendar::{HolidayCalendar, classify, easter_sunday, holidays_for_year};
use worklog::models::{Settings, TimeEntry, YearMonth};

/// Hours in quarter-hour steps from 0 to 24.
fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..=96).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

/// Thresholds in half-hour steps from 0.5 to 12.
fn threshold() -> impl Strategy<Value = Decimal> {
    (1i64..=24).prop_map(|halves| Decimal::new(halves * 5, 1))
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=366).prop_filter_map("valid ordinal", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

fn entries_on(date: NaiveDate) -> impl Strategy<Value = Vec<TimeEntry>> {
    prop::collection::vec(hours(), 0..6)
        .prop_map(move |hs| hs.into_iter().map(|h| TimeEntry::new(date, h)).collect())
}

proptest! {
    #[test]
    fn normal_plus_over_equals_hours(
        (date, entries) in date().prop_flat_map(|d| (Just(d), entries_on(d))),
        threshold in threshold(),
    ) {
        let totals = day_totals(&entries, date, &Settings::with_threshold(threshold), &HolidayCalendar::new());
        prop_assert_eq!(totals.normal + totals.over, totals.hours);
        prop_assert!(totals.normal >= Decimal::ZERO);
        prop_assert!(totals.over >= Decimal::ZERO);
    }

    #[test]
    fn day_split_follows_classification(
        date in date(),
        hours in hours(),
        threshold in threshold(),
    ) {
        let entries = [TimeEntry::new(date, hours)];
        let totals = day_totals(&entries, date, &Settings::with_threshold(threshold), &HolidayCalendar::new());
        let class = classify(date);

        if (class.weekend || class.holiday) && hours > Decimal::ZERO {
            prop_assert_eq!(totals.normal, Decimal::ZERO);
            prop_assert_eq!(totals.over, hours);
        } else if class.workday && hours <= threshold {
            prop_assert_eq!(totals.normal, hours);
            prop_assert_eq!(totals.over, Decimal::ZERO);
        } else if class.workday {
            prop_assert_eq!(totals.normal, threshold);
            prop_assert_eq!(totals.over, hours - threshold);
        }
    }

    #[test]
    fn every_year_has_thirteen_holidays(year in 1583i32..4000) {
        prop_assert_eq!(holidays_for_year(year).len(), 13);
    }

    #[test]
    fn easter_is_a_sunday_in_window(year in 1583i32..4000) {
        let easter = easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), chrono::Weekday::Sun);
        let window_start = NaiveDate::from_ymd_opt(year, 3, 22).unwrap();
        let window_end = NaiveDate::from_ymd_opt(year, 4, 25).unwrap();
        prop_assert!(easter >= window_start && easter <= window_end);
    }

    #[test]
    fn required_hours_is_workdays_times_threshold(
        year in 1990i32..2100,
        month in 1u32..=12,
        threshold in threshold(),
    ) {
        let month = YearMonth::new(year, month).unwrap();
        let calendar = HolidayCalendar::new();
        let workdays = month.days().filter(|&d| calendar.is_workday(d)).count();
        prop_assert_eq!(
            required_hours_for_month(month, &Settings::with_threshold(threshold), &calendar),
            Decimal::from(workdays) * threshold
        );
    }

    #[test]
    fn month_total_is_order_independent(
        mut entries in prop::collection::vec(
            (date(), hours()).prop_map(|(d, h)| TimeEntry::new(d, h)),
            0..40,
        ),
        month in 1u32..=12,
        year in 1990i32..2100,
    ) {
        let month = YearMonth::new(year, month).unwrap();
        let expected: Decimal = entries
            .iter()
            .filter(|e| month.contains(e.date))
            .map(|e| e.hours)
            .sum();

        prop_assert_eq!(total_hours_for_month(&entries, month), expected);
        entries.reverse();
        prop_assert_eq!(total_hours_for_month(&entries, month), expected);
    }

    #[test]
    fn memoized_calendar_matches_pure_classification(dates in prop::collection::vec(date(), 1..50)) {
        let calendar = HolidayCalendar::new();
        for date in dates {
            prop_assert_eq!(calendar.classify(date), classify(date));
        }
    }
}

#[test]
fn known_examples() {
    let calendar = HolidayCalendar::new();
    let settings = Settings::default();
    let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();

    let midsummer_eve = day_totals(&[TimeEntry::new(d(23), Decimal::from(4))], d(23), &settings, &calendar);
    assert_eq!((midsummer_eve.normal, midsummer_eve.over), (Decimal::ZERO, Decimal::from(4)));

    let tuesday = day_totals(&[TimeEntry::new(d(17), Decimal::from(10))], d(17), &settings, &calendar);
    assert_eq!((tuesday.normal, tuesday.over), (Decimal::from(8), Decimal::from(2)));

    let saturday = day_totals(&[TimeEntry::new(d(14), Decimal::ZERO)], d(14), &settings, &calendar);
    assert_eq!((saturday.normal, saturday.over), (Decimal::ZERO, Decimal::ZERO));

    assert_eq!(
        easter_sunday(2024),
        NaiveDate::from_ymd_opt(2024, 3, 31)
    );
}
