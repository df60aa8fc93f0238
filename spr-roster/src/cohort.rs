//! Cohort statistics over derived players.

use crate::player::Player;
use crate::status::Status;
use log::debug;
use serde::Serialize;
use spr_calendar::{average_date, diff_ymd, CalendarDate, CalendarError, DateDifference};

/// Default lower bound on the player number for the promotion-age cohort.
pub const DEFAULT_MIN_NUM: u32 = 184;

/// Average four-dan promotion age of a cohort.
///
/// The age is the difference between the average birthday and the average
/// promotion date, not the mean of the individual ages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CohortAverage {
    /// Players having both a birthday and a promotion date.
    pub count: usize,
    pub average_birthday: CalendarDate,
    pub average_four_day: CalendarDate,
    pub average_age: DateDifference,
}

pub fn average_promotion_age<'a, I>(players: I) -> Result<CohortAverage, CalendarError>
where
    I: IntoIterator<Item = &'a Player>,
{
    let (births, promotions): (Vec<CalendarDate>, Vec<CalendarDate>) = players
        .into_iter()
        .filter_map(|p| p.birthday.zip(p.four_day))
        .unzip();

    let average_birthday = average_date(&births)?;
    let average_four_day = average_date(&promotions)?;
    let average_age = diff_ymd(average_birthday, average_four_day);
    debug!(
        "Cohort of {}: average birthday {}, average four-dan {}",
        births.len(),
        average_birthday,
        average_four_day
    );

    Ok(CohortAverage {
        count: births.len(),
        average_birthday,
        average_four_day,
        average_age,
    })
}

/// Player at the median four-dan promotion age.
///
/// Players are ordered by promotion age in days, keeping their input order
/// on ties, and the lower-middle one is taken for an even count. Players
/// without a promotion age are ignored.
pub fn median_promotion_age<'a, I>(players: I) -> Option<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut ranked: Vec<&Player> = players
        .into_iter()
        .filter(|p| p.four_age_days.is_some())
        .collect();
    if ranked.is_empty() {
        return None;
    }
    ranked.sort_by_key(|p| p.four_age_days);
    Some(ranked[(ranked.len() - 1) / 2])
}

/// Whether `player` shares the median's promotion age and should be marked.
pub fn is_median(player: &Player, median: Option<&Player>) -> bool {
    match median {
        Some(m) => player.four_age_days.is_some() && player.four_age_days == m.four_age_days,
        None => false,
    }
}

/// Players numbered `min_num` or higher.
pub fn by_min_num(players: &[Player], min_num: u32) -> Vec<&Player> {
    players
        .iter()
        .filter(|p| p.num.is_some_and(|n| n >= min_num))
        .collect()
}

pub fn by_status(players: &[Player], status: Status) -> Vec<&Player> {
    players.iter().filter(|p| p.status == status).collect()
}
