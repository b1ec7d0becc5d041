//! Printable HTML report.

use super::{
    ChipStyle, EMPTY_MONTH_MESSAGE, ReportOptions, day_label, day_meta, escape_html, format_number,
    header_lines,
};
use crate::models::{DayTotals, MonthSummary};

const STYLESHEET: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2933; }
h1 { font-size: 1.4rem; margin-bottom: 0.25rem; }
p.summary { margin: 0.15rem 0; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
th, td { border-bottom: 1px solid #d9e2ec; padding: 0.4rem 0.5rem; text-align: left; vertical-align: top; }
td.meta { color: #52606d; font-size: 0.9rem; }
td.empty { color: #7b8794; font-style: italic; }
.chip { display: inline-block; min-width: 3.5rem; padding: 0.1rem 0.5rem; border-radius: 999px; text-align: center; }
.chip-blue { background: #dbeafe; color: #1e3a8a; }
.chip-green { background: #dcfce7; color: #14532d; }
.chip-orange { background: #ffedd5; color: #7c2d12; }
.chip-gray { background: #e5e7eb; color: #374151; }
@media print { body { margin: 0; } }
";

/// Renders `summary` as a standalone printable HTML document.
///
/// Activity labels are escaped. Each day gets a chip coloured by
/// [`ChipStyle::for_day`].
///
/// # Example
///
/// ```
/// use worklog::calculation::summarize_month;
/// use worklog::calendar::HolidayCalendar;
/// use worklog::models::{Settings, YearMonth};
/// use worklog::report::{render_html, ReportOptions};
///
/// let month = YearMonth::new(2025, 6).unwrap();
/// let summary = summarize_month(&[], month, &Settings::default(), &HolidayCalendar::new());
/// let html = render_html(&summary, &ReportOptions::default());
///
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<title>2025. gada Jūnijs</title>"));
/// ```
pub fn render_html(summary: &MonthSummary, options: &ReportOptions) -> String {
    let [title, targets, total] = header_lines(summary, options).map(|line| escape_html(&line));

    let mut lines = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"lv\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{title}</title>"),
        format!("<style>\n{STYLESHEET}</style>"),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h1>{title}</h1>"),
        format!("<p class=\"summary\">{targets}</p>"),
        format!("<p class=\"summary\">{total}</p>"),
        "<table>".to_string(),
        "<tbody>".to_string(),
    ];

    if summary.is_empty() {
        lines.push(format!(
            "<tr><td class=\"empty\" colspan=\"3\">{}</td></tr>",
            escape_html(EMPTY_MONTH_MESSAGE)
        ));
    }
    lines.extend(summary.days.iter().map(|day| day_row(day, options)));

    lines.extend(["</tbody>", "</table>", "</body>", "</html>"].map(String::from));

    let mut html = lines.join("\n");
    html.push('\n');
    html
}

fn day_row(day: &DayTotals, options: &ReportOptions) -> String {
    let chip = ChipStyle::for_day(day);
    let activities: Vec<String> = day.activities().map(escape_html).collect();

    let mut meta = escape_html(&day_meta(day, options));
    if !activities.is_empty() {
        meta.push_str("<br>");
        meta.push_str(&activities.join("; "));
    }

    [
        "<tr>".to_string(),
        format!("<td class=\"day\">{}</td>", escape_html(&day_label(day.date))),
        format!(
            "<td><span class=\"chip {}\">{} h</span></td>",
            chip.css_class(),
            format_number(day.hours, options.day_decimals)
        ),
        format!("<td class=\"meta\">{meta}</td>"),
        "</tr>".to_string(),
    ]
    .join("\n")
}
