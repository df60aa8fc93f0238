use crate::date::CalendarDate;
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub CalendarDate, pub CalendarDate);

impl Iterator for DateRange {
    type Item = CalendarDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            match self.0.succ() {
                Some(next) => Some(replace(&mut self.0, next)),
                None => {
                    // Last representable day: yield it and close the range.
                    let last = self.0;
                    if let Some(pred) = last.as_naive_date().pred_opt() {
                        self.1 = pred.into();
                    }
                    Some(last)
                }
            }
        } else {
            None
        }
    }
}
