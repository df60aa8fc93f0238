use crate::error::CalendarError;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by the roster CSV and by every rendered date: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Milliseconds in one UTC day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A calendar day with no time-of-day component, taken as UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a (year, month, day) triple, rejecting days that do
    /// not exist such as April 31 or February 29 of a common year.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| CalendarError::ImpossibleDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Exactly four digits, a dash, two digits, a dash and two digits are
    /// accepted; anything else is `InvalidDateFormat`. A well-formed string
    /// naming a day that does not exist is `ImpossibleDate`.
    pub fn parse(s: &str) -> Result<Self, CalendarError> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return Err(CalendarError::InvalidDateFormat(s.to_string()));
        }
        let invalid = || CalendarError::InvalidDateFormat(s.to_string());
        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u32 = s[8..10].parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::ImpossibleDate(s.to_string()))?;
        // Re-derive the triple; a constructed date must reproduce its source.
        if date.year() != year || date.month() != month || date.day() != day {
            return Err(CalendarError::ImpossibleDate(s.to_string()));
        }
        Ok(CalendarDate(date))
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Signed number of whole days from 1970-01-01 to this date.
    pub fn day_count(&self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }

    /// Inverse of [`CalendarDate::day_count`].
    pub fn from_day_count(days: i64) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::OutOfRange(format!("day count {days}"));
        let from_ce = days
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(|d| i32::try_from(d).ok())
            .ok_or_else(out_of_range)?;
        NaiveDate::from_num_days_from_ce_opt(from_ce)
            .map(CalendarDate)
            .ok_or_else(out_of_range)
    }

    /// Millisecond timestamp of this date's UTC midnight.
    pub fn timestamp_millis(&self) -> i64 {
        self.day_count() * MS_PER_DAY
    }

    /// Date containing the given UTC millisecond instant (floored to the day).
    pub fn from_timestamp_millis(ms: i64) -> Result<Self, CalendarError> {
        Self::from_day_count(ms.div_euclid(MS_PER_DAY))
    }

    /// Advance by whole years, keeping month and day. A day that does not
    /// exist in the target year (Feb 29) is clamped to the month's last day.
    pub fn add_years_clamped(&self, years: u32) -> Option<Self> {
        let months = years.checked_mul(12)?;
        self.add_months_clamped(months)
    }

    /// Advance by whole calendar months, clamping the day to the last day of
    /// the target month (Jan 31 + 1 month is Feb 28 or Feb 29).
    pub fn add_months_clamped(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(CalendarDate)
    }

    /// Advance by whole days.
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(chrono::Days::new(days)).map(CalendarDate)
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }

    /// Format as "YYYY-MM-DD"
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        CalendarDate(value)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(value: CalendarDate) -> Self {
        value.0
    }
}
