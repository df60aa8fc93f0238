use crate::{date::CalendarDate, error::CalendarError};

/// The "average date" of a collection of dates.
///
/// Every date is taken as its UTC-midnight millisecond timestamp; the mean
/// timestamp is rounded to the nearest millisecond (halves round up, toward
/// positive infinity) and the result is the day containing that instant.
pub fn average_date(dates: &[CalendarDate]) -> Result<CalendarDate, CalendarError> {
    if dates.is_empty() {
        return Err(CalendarError::InsufficientData);
    }
    let sum: i128 = dates.iter().map(|d| i128::from(d.timestamp_millis())).sum();
    let count = dates.len() as i128;
    // floor(sum / count + 1/2)
    let mean = (2 * sum + count).div_euclid(2 * count);
    let mean = i64::try_from(mean)
        .map_err(|_| CalendarError::OutOfRange(format!("mean timestamp {mean}")))?;
    CalendarDate::from_timestamp_millis(mean)
}
