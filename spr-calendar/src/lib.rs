//! Calendar arithmetic for player ages and promotion spans.
//!
//! All dates are day-granularity values normalized to UTC midnight. Day
//! counts and millisecond timestamps are measured from 1970-01-01, so the
//! average of a set of dates and the whole-day difference between two dates
//! agree with each other exactly.

pub mod average;
pub mod date;
pub mod date_range;
pub mod diff;
pub mod error;

pub use average::average_date;
pub use date::{CalendarDate, DATE_FORMAT, MS_PER_DAY};
pub use date_range::DateRange;
pub use diff::{advance, diff_ymd, format_age_string, DateDifference, SpanStyle};
pub use error::CalendarError;
