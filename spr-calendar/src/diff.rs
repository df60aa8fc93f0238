//! Calendar-aware year/month/day differences.
//!
//! `diff_ymd` walks from the earlier date toward the later one, greedily
//! taking whole years, then whole months, then leftover days. Every year and
//! month step clamps the day-of-month when it does not exist in the target
//! month, so the walk never overshoots into the following month.

use crate::date::CalendarDate;
use serde::{Deserialize, Serialize};

/// A non-negative span between two calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateDifference {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl DateDifference {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub fn format(&self, style: SpanStyle) -> String {
        format_age_string(self, style)
    }
}

/// How the year count of a span is labeled when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanStyle {
    /// A person's age: `20歳3ヶ月5日`
    Age,
    /// Elapsed time such as a career length: `20年3ヶ月5日`
    Elapsed,
}

impl SpanStyle {
    pub fn year_suffix(&self) -> &'static str {
        match self {
            SpanStyle::Age => "歳",
            SpanStyle::Elapsed => "年",
        }
    }
}

/// Compute the span between two dates as (years, months, days).
///
/// Arguments given in reverse order are swapped, so the result is the same
/// for `diff_ymd(a, b)` and `diff_ymd(b, a)`.
pub fn diff_ymd(start: CalendarDate, end: CalendarDate) -> DateDifference {
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let mut cursor = start;

    let mut years = 0u32;
    while let Some(next) = cursor.add_years_clamped(1) {
        if next > end {
            break;
        }
        cursor = next;
        years += 1;
    }

    let mut months = 0u32;
    while let Some(next) = cursor.add_months_clamped(1) {
        if next > end {
            break;
        }
        cursor = next;
        months += 1;
    }

    // The cursor is at most one month behind `end` here.
    let days = (end.day_count() - cursor.day_count()) as u32;

    DateDifference {
        years,
        months,
        days,
    }
}

/// Rebuild an end date from a start date and a span, one clamped year at a
/// time, then one clamped month at a time, then whole days.
///
/// This is the exact inverse of [`diff_ymd`]: for `start <= end`,
/// `advance(start, diff_ymd(start, end)) == Some(end)`.
pub fn advance(start: CalendarDate, diff: DateDifference) -> Option<CalendarDate> {
    let mut cursor = start;
    for _ in 0..diff.years {
        cursor = cursor.add_years_clamped(1)?;
    }
    for _ in 0..diff.months {
        cursor = cursor.add_months_clamped(1)?;
    }
    cursor.add_days(u64::from(diff.days))
}

/// Render a span as `{years}{歳|年}{months}ヶ月{days}日`.
pub fn format_age_string(diff: &DateDifference, style: SpanStyle) -> String {
    format!(
        "{}{}{}ヶ月{}日",
        diff.years,
        style.year_suffix(),
        diff.months,
        diff.days
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::DateRange;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_diff_same_day_is_zero() {
        for s in ["2000-01-01", "2024-02-29", "1999-12-31"] {
            assert_eq!(diff_ymd(date(s), date(s)), DateDifference::default());
        }
    }

    #[test]
    fn test_diff_simple() {
        assert_eq!(
            diff_ymd(date("2000-01-01"), date("2020-01-01")),
            DateDifference::new(20, 0, 0)
        );
        assert_eq!(
            diff_ymd(date("1970-09-27"), date("2026-10-19")),
            DateDifference::new(56, 0, 22)
        );
        assert_eq!(
            diff_ymd(date("2002-07-19"), date("2016-10-01")),
            DateDifference::new(14, 2, 12)
        );
    }

    #[test]
    fn test_diff_is_symmetric() {
        let pairs = [
            ("2024-02-29", "2025-03-01"),
            ("1970-01-31", "1971-03-01"),
            ("2000-07-02", "2020-12-31"),
        ];
        for (a, b) in pairs {
            assert_eq!(diff_ymd(date(a), date(b)), diff_ymd(date(b), date(a)));
        }
    }

    #[test]
    fn test_diff_leap_day_start() {
        // The year step clamps 2024-02-29 to 2025-02-28; one day remains.
        assert_eq!(
            diff_ymd(date("2024-02-29"), date("2025-03-01")),
            DateDifference::new(1, 0, 1)
        );
        assert_eq!(
            diff_ymd(date("2024-02-29"), date("2025-02-28")),
            DateDifference::new(1, 0, 0)
        );
        assert_eq!(
            diff_ymd(date("2024-02-29"), date("2025-02-27")),
            DateDifference::new(0, 11, 29)
        );
    }

    #[test]
    fn test_diff_month_end_clamp() {
        // Jan 31 + 1 month clamps to Feb 28, the cursor then stays on day 28.
        assert_eq!(
            diff_ymd(date("2023-01-31"), date("2023-02-28")),
            DateDifference::new(0, 1, 0)
        );
        assert_eq!(
            diff_ymd(date("2023-01-31"), date("2023-03-30")),
            DateDifference::new(0, 2, 2)
        );
        assert_eq!(
            diff_ymd(date("2023-01-31"), date("2023-02-27")),
            DateDifference::new(0, 0, 27)
        );
    }

    #[test]
    fn test_advance_reconstructs_end() {
        let starts = ["2024-02-29", "2023-01-31", "1999-12-31", "2000-07-02"];
        for start in starts {
            let start = date(start);
            let end_limit = start.add_years_clamped(3).unwrap();
            for end in DateRange(start, end_limit) {
                let diff = diff_ymd(start, end);
                assert_eq!(advance(start, diff), Some(end), "{start} -> {end} via {diff:?}");
            }
        }
    }

    #[test]
    fn test_format_age_string_styles() {
        let diff = DateDifference::new(20, 5, 29);
        assert_eq!(format_age_string(&diff, SpanStyle::Age), "20歳5ヶ月29日");
        assert_eq!(format_age_string(&diff, SpanStyle::Elapsed), "20年5ヶ月29日");
        assert_eq!(DateDifference::default().format(SpanStyle::Age), "0歳0ヶ月0日");
    }
}
