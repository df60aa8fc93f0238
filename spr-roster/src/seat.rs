//! Seat order (席次): the official ranking order of players.
//!
//! 1. Title holders first, in the order of [`Rules::title_holders`].
//! 2. Players without a promotion date for their current rank go last,
//!    ordered by player number.
//! 3. Otherwise higher rank first, then earlier promotion to that rank,
//!    then smaller player number.

use crate::error::RosterError;
use crate::player::parse_date_cell;
use crate::rules::Rules;
use crate::status::Dan;
use spr_calendar::CalendarDate;
use spr_csv::Record;
use std::cmp::Ordering;

/// Sort key for seat order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    pub title_rank: Option<usize>,
    pub dan_rank: u8,
    /// Promotion date to the current rank.
    pub promoted_on: Option<CalendarDate>,
    pub num: Option<u32>,
}

impl Seat {
    pub fn new(
        rules: &Rules,
        name: &str,
        dan: Dan,
        promoted_on: Option<CalendarDate>,
        num: Option<u32>,
    ) -> Self {
        Self {
            title_rank: rules.title_rank(name),
            dan_rank: dan.rank(),
            promoted_on,
            num,
        }
    }

    pub fn is_date_missing(&self) -> bool {
        self.promoted_on.is_none()
    }

    fn num_or_last(&self) -> u32 {
        self.num.unwrap_or(u32::MAX)
    }
}

/// Seat key of a record, reading the promotion date to its current rank.
///
/// `row` is the 1-based data row, used when the date cell is malformed.
pub fn derive_seat(
    rules: &Rules,
    record: &Record<'_>,
    row: usize,
    dan: Dan,
    name: &str,
    num: Option<u32>,
) -> Result<Seat, RosterError> {
    let promoted_on = match rules.promotion_column(dan) {
        Some(col) => parse_date_cell(row, col, record.get(col))?,
        None => None,
    };
    Ok(Seat::new(rules, name, dan, promoted_on, num))
}

pub fn compare_seat(a: &Seat, b: &Seat) -> Ordering {
    match (a.title_rank, b.title_rank) {
        (Some(at), Some(bt)) => return at.cmp(&bt),
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => {}
    }

    let (ad, bd) = match (a.promoted_on, b.promoted_on) {
        (None, None) => return a.num_or_last().cmp(&b.num_or_last()),
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(ad), Some(bd)) => (ad, bd),
    };

    b.dan_rank
        .cmp(&a.dan_rank)
        .then_with(|| ad.cmp(&bd))
        .then_with(|| a.num_or_last().cmp(&b.num_or_last()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(title: Option<usize>, dan: u8, date: Option<&str>, num: Option<u32>) -> Seat {
        Seat {
            title_rank: title,
            dan_rank: dan,
            promoted_on: date.map(|d| CalendarDate::parse(d).unwrap()),
            num,
        }
    }

    #[test]
    fn test_title_holders_rank_first_in_list_order() {
        let champion = seat(Some(0), 9, Some("2020-01-01"), Some(307));
        let former = seat(Some(3), 9, Some("1994-04-01"), Some(175));
        let veteran = seat(None, 9, Some("1980-04-01"), Some(100));
        assert_eq!(compare_seat(&champion, &former), Ordering::Less);
        assert_eq!(compare_seat(&former, &veteran), Ordering::Less);
        assert_eq!(compare_seat(&veteran, &champion), Ordering::Greater);
    }

    #[test]
    fn test_missing_dates_go_last_by_number() {
        let dated = seat(None, 4, Some("2020-10-01"), Some(300));
        let missing_low = seat(None, 0, None, Some(10));
        let missing_none = seat(None, 0, None, None);
        assert_eq!(compare_seat(&dated, &missing_low), Ordering::Less);
        assert_eq!(compare_seat(&missing_low, &missing_none), Ordering::Less);
    }

    #[test]
    fn test_derive_seat_reads_current_rank_date() {
        let table = spr_csv::CsvTable::from_text(
            "num,name,four-day,five-day,six-day\n42,X,2000-04-01,2003-04-01,\n",
        );
        let record = table.get(0).unwrap();
        let rules = Rules::default();
        let dan = rules.derive_dan(&record);
        let seat = derive_seat(&rules, &record, 1, dan, "X", Some(42)).unwrap();
        assert_eq!(seat.dan_rank, 5);
        assert_eq!(seat.promoted_on, CalendarDate::parse("2003-04-01").ok());
        assert_eq!(seat.title_rank, None);
    }

    #[test]
    fn test_rank_then_date_then_number() {
        let mut seats = vec![
            seat(None, 8, Some("2001-04-01"), Some(5)),
            seat(None, 9, Some("2010-04-01"), Some(7)),
            seat(None, 8, Some("1999-04-01"), Some(6)),
            seat(None, 8, Some("1999-04-01"), Some(2)),
        ];
        seats.sort_by(compare_seat);
        let nums: Vec<Option<u32>> = seats.iter().map(|s| s.num).collect();
        assert_eq!(nums, vec![Some(7), Some(2), Some(6), Some(5)]);
    }
}
