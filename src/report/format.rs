//! `lv-LV` formatting helpers.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::YearMonth;

const GROUP_SEPARATOR: char = '\u{a0}';

const MONTH_NAMES: [&str; 12] = [
    "janvāris",
    "februāris",
    "marts",
    "aprīlis",
    "maijs",
    "jūnijs",
    "jūlijs",
    "augusts",
    "septembris",
    "oktobris",
    "novembris",
    "decembris",
];

/// Formats `value` with exactly `decimals` fractional digits, a decimal comma
/// and, from five integer digits up, no-break-space thousands groups.
///
/// Midpoints round away from zero.
///
/// # Example
///
/// ```
/// use worklog::report::format_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_number(Decimal::new(1425, 1), 2), "142,50");
/// assert_eq!(format_number(Decimal::new(1234, 0), 1), "1234,0");
/// assert_eq!(format_number(Decimal::new(12345, 0), 0), "12\u{a0}345");
/// ```
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let mut fixed = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(decimals);

    let digits = fixed.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::new();
    if fixed.is_sign_negative() && !fixed.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if decimals > 0 {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

/// Formats `value` with as many decimals as it needs, using a decimal comma.
pub fn format_plain(value: Decimal) -> String {
    let normalized = value.normalize();
    format_number(normalized, normalized.scale())
}

fn group_thousands(integer: &str) -> String {
    if integer.len() < 5 {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// The lowercase Latvian name of a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// The abbreviated Latvian weekday name, e.g. `otrd.`.
pub fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "pirmd.",
        Weekday::Tue => "otrd.",
        Weekday::Wed => "trešd.",
        Weekday::Thu => "ceturtd.",
        Weekday::Fri => "piektd.",
        Weekday::Sat => "sestd.",
        Weekday::Sun => "svētd.",
    }
}

/// Upper-cases the first character of `text`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The report title of a month, e.g. `2025. gada Jūnijs`.
pub fn month_title(month: YearMonth) -> String {
    format!("{}. gada {}", month.year(), capitalize(month_name(month.month())))
}

/// The label of a day row, e.g. `otrd., 17. jūnijs`.
///
/// # Example
///
/// ```
/// use worklog::report::day_label;
/// use chrono::NaiveDate;
///
/// let label = day_label(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// assert_eq!(label, "svētd., 01. jūnijs");
/// ```
pub fn day_label(date: NaiveDate) -> String {
    format!(
        "{}, {:02}. {}",
        weekday_short(date.weekday()),
        date.day(),
        month_name(date.month())
    )
}

/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_pads_decimals() {
        assert_eq!(format_number(dec("8"), 2), "8,00");
        assert_eq!(format_number(dec("0"), 1), "0,0");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_number(dec("2.25"), 1), "2,3");
        assert_eq!(format_number(dec("2.35"), 1), "2,4");
        assert_eq!(format_number(dec("-2.25"), 1), "-2,3");
        assert_eq!(format_number(dec("0.005"), 2), "0,01");
    }

    #[test]
    fn test_format_zero_decimals_has_no_comma() {
        assert_eq!(format_number(dec("152"), 0), "152");
        assert_eq!(format_number(dec("7.5"), 0), "8");
    }

    #[test]
    fn test_format_groups_large_numbers() {
        assert_eq!(format_number(dec("9999.5"), 1), "9999,5");
        assert_eq!(format_number(dec("10000"), 1), "10\u{a0}000,0");
        assert_eq!(format_number(dec("1234567.891"), 2), "1\u{a0}234\u{a0}567,89");
    }

    #[test]
    fn test_format_negative_zero_has_no_sign() {
        assert_eq!(format_number(dec("-0.001"), 1), "0,0");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(dec("152")), "152");
        assert_eq!(format_plain(dec("142.50")), "142,5");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "janvāris");
        assert_eq!(month_name(12), "decembris");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(capitalize("jūnijs"), "Jūnijs");
        assert_eq!(capitalize("ēka"), "Ēka");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_month_title() {
        let month = YearMonth::new(2025, 2).unwrap();
        assert_eq!(month_title(month), "2025. gada Februāris");
    }

    #[test]
    fn test_day_label_weekdays() {
        let label = |d| day_label(NaiveDate::from_ymd_opt(2025, 6, d).unwrap());
        assert_eq!(label(16), "pirmd., 16. jūnijs");
        assert_eq!(label(17), "otrd., 17. jūnijs");
        assert_eq!(label(18), "trešd., 18. jūnijs");
        assert_eq!(label(19), "ceturtd., 19. jūnijs");
        assert_eq!(label(20), "piektd., 20. jūnijs");
        assert_eq!(label(21), "sestd., 21. jūnijs");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
