//! Roster derivation for professional shogi players.
//!
//! Turns the header-keyed rows of the roster CSV into [`Player`] values with
//! their rank, status, seat key and age spans computed against a reference
//! day, and provides the filters, sort orders and cohort statistics the
//! commands are built from.

pub mod cohort;
pub mod error;
pub mod filter;
pub mod metric;
pub mod player;
pub mod rules;
pub mod seat;
pub mod status;

pub use cohort::{
    average_promotion_age, by_min_num, by_status, is_median, median_promotion_age, CohortAverage,
    DEFAULT_MIN_NUM,
};
pub use error::RosterError;
pub use filter::{Filters, NumFilter};
pub use metric::{sort_by_metric, sort_by_seat, Metric, SortOrder};
pub use player::{Player, Roster, BLANK_TEXT, UNKNOWN_TEXT};
pub use rules::{Columns, Rules, TITLE_HOLDERS};
pub use seat::{compare_seat, derive_seat, Seat};
pub use status::{Dan, Status};

#[cfg(test)]
mod tests {
    use super::*;
    use spr_calendar::{CalendarDate, CalendarError, DateDifference};
    use spr_csv::CsvTable;

    const PROFILE: &str = include_str!("../../fixtures/profile.csv");

    fn today() -> CalendarDate {
        CalendarDate::from_ymd(2026, 10, 19).unwrap()
    }

    fn roster() -> Roster {
        let table = CsvTable::from_text(PROFILE);
        Roster::derive(&table, &Rules::default(), today()).unwrap()
    }

    fn find(roster: &Roster, num: u32) -> &Player {
        roster.iter().find(|p| p.num == Some(num)).unwrap()
    }

    fn nums(players: &[&Player]) -> Vec<u32> {
        players.iter().filter_map(|p| p.num).collect()
    }

    #[test]
    fn test_derive_fixture_sorted_by_name() {
        let roster = roster();
        assert_eq!(roster.len(), 11);
        assert_eq!(roster.today(), today());
        let order: Vec<u32> = roster.iter().filter_map(|p| p.num).collect();
        assert_eq!(
            order,
            vec![150, 250, 230, 190, 185, 210, 200, 184, 102, 101, 240]
        );
    }

    #[test]
    fn test_status_and_dan() {
        let roster = roster();
        assert_eq!(find(&roster, 101).status, Status::Retired);
        assert_eq!(find(&roster, 101).dan, Dan::Nine);
        assert_eq!(find(&roster, 102).status, Status::Deceased);
        assert_eq!(find(&roster, 102).dan, Dan::Six);
        assert_eq!(find(&roster, 190).status, Status::Withdrawn);
        assert_eq!(find(&roster, 190).dan, Dan::Five);
        assert_eq!(find(&roster, 250).status, Status::Active);
        assert_eq!(find(&roster, 250).dan, Dan::Unknown);
        assert_eq!(find(&roster, 200).name, "木村, 七郎");
    }

    #[test]
    fn test_derived_spans() {
        let roster = roster();
        let p = find(&roster, 184);
        assert_eq!(p.age, Some(DateDifference::new(56, 0, 22)));
        assert_eq!(p.four_age, Some(DateDifference::new(17, 6, 5)));
        assert_eq!(p.active_span, Some(DateDifference::new(38, 6, 18)));
        assert_eq!(p.age_days, Some(20476));
        assert_eq!(p.four_age_days, Some(6396));
        assert_eq!(p.age_text(), "56歳0ヶ月22日");
        assert_eq!(p.active_span_text(), "38年6ヶ月18日");

        let leap = find(&roster, 150);
        assert_eq!(leap.age, Some(DateDifference::new(66, 7, 21)));
        assert_eq!(leap.four_age, Some(DateDifference::new(20, 7, 3)));
    }

    #[test]
    fn test_missing_dates_render_unknown() {
        let roster = roster();
        let p = find(&roster, 250);
        assert_eq!(p.birthday, None);
        assert_eq!(p.age, None);
        assert_eq!(p.four_age_days, None);
        assert_eq!(p.age_text(), UNKNOWN_TEXT);
        assert_eq!(p.four_day_text(), UNKNOWN_TEXT);
        assert!(p.seat.is_date_missing());
    }

    #[test]
    fn test_malformed_date_fails_derivation() {
        let text = "num,name,birthday,four-day\n1,A,2000-02-30,2020-04-01\n";
        let table = CsvTable::from_text(text);
        let err = Roster::derive(&table, &Rules::default(), today()).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidDate {
                row: 1,
                column: "birthday".to_string(),
                source: CalendarError::ImpossibleDate("2000-02-30".to_string()),
            }
        );
    }

    #[test]
    fn test_misshapen_date_reports_format_error() {
        let text = "num,name,birthday,four-day\n1,A,2000-01-01,2020-04-01\n2,B,1999-05-05,2019/04/01\n";
        let table = CsvTable::from_text(text);
        let err = Roster::derive(&table, &Rules::default(), today()).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidDate {
                row: 2,
                column: "four-day".to_string(),
                source: CalendarError::InvalidDateFormat("2019/04/01".to_string()),
            }
        );
        assert!(err.to_string().starts_with("Row 2, column \"four-day\": "));
    }

    #[test]
    fn test_seat_order() {
        let roster = roster();
        let all: Vec<&Player> = roster.iter().collect();
        assert_eq!(
            nums(&sort_by_seat(&all)),
            vec![101, 150, 184, 240, 185, 102, 200, 190, 210, 230, 250]
        );
    }

    #[test]
    fn test_sort_by_metric_puts_unknown_last() {
        let roster = roster();
        let active = Filters {
            status: Some(Status::Active),
            ..Filters::default()
        }
        .apply(roster.players());

        let asc = sort_by_metric(&active, Metric::FourAge, SortOrder::Asc);
        assert_eq!(nums(&asc), vec![240, 184, 185, 210, 200, 230, 150, 250]);

        let desc = sort_by_metric(&active, Metric::Age, SortOrder::Desc);
        assert_eq!(nums(&desc), vec![150, 184, 185, 200, 210, 230, 240, 250]);
    }

    #[test]
    fn test_filters() {
        let roster = roster();
        let by_name = Filters {
            name: Some("郎".to_string()),
            num: Some("184-200".parse().unwrap()),
            ..Filters::default()
        };
        assert_eq!(nums(&by_name.apply(roster.players())), vec![190, 185, 200, 184]);

        let by_age = Filters {
            age_min: Some(41),
            age_max: Some(55),
            ..Filters::default()
        };
        assert_eq!(nums(&by_age.apply(roster.players())), vec![190, 185, 210, 200]);

        let nine_dan = Filters {
            dan: Some(Dan::Nine),
            ..Filters::default()
        };
        assert_eq!(nums(&nine_dan.apply(roster.players())), vec![150, 184, 101, 240]);
    }

    #[test]
    fn test_cohort_average_and_median() {
        let roster = roster();
        let cohort = by_min_num(roster.players(), DEFAULT_MIN_NUM);
        let avg = average_promotion_age(cohort.iter().copied()).unwrap();
        assert_eq!(avg.count, 7);
        assert_eq!(avg.average_birthday, CalendarDate::parse("1982-08-28").unwrap());
        assert_eq!(avg.average_four_day, CalendarDate::parse("2000-12-17").unwrap());
        assert_eq!(avg.average_age, DateDifference::new(18, 3, 19));

        let median = median_promotion_age(cohort.iter().copied()).unwrap();
        assert_eq!(median.num, Some(190));
    }

    #[test]
    fn test_active_cohort_average() {
        let roster = roster();
        let active = by_status(roster.players(), Status::Active);
        let avg = average_promotion_age(active.iter().copied()).unwrap();
        assert_eq!(avg.count, 7);
        assert_eq!(avg.average_birthday, CalendarDate::parse("1980-11-20").unwrap());
        assert_eq!(avg.average_four_day, CalendarDate::parse("1999-06-19").unwrap());
        assert_eq!(avg.average_age, DateDifference::new(18, 6, 30));
    }
}
