//! Sort metrics and the table columns each one shows.

use crate::error::RosterError;
use crate::player::Player;
use crate::seat::compare_seat;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The quantity a search result is sorted by.
///
/// Each metric also decides the two companion columns shown next to it:
///
/// | metric        | metric column  | column A   | column B     |
/// |---------------|----------------|------------|--------------|
/// | `age`         | 年齢           | 生年月日   | 現役期間     |
/// | `four-age`    | 四段昇段年齢   | 生年月日   | 四段昇段日   |
/// | `active-span` | 現役期間       | 四段昇段日 | 四段昇段年齢 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    Age,
    FourAge,
    ActiveSpan,
}

impl Metric {
    /// Headings of the metric column and its two companion columns.
    pub fn headers(&self) -> [&'static str; 3] {
        match self {
            Metric::Age => ["年齢", "生年月日", "現役期間"],
            Metric::FourAge => ["四段昇段年齢", "生年月日", "四段昇段日"],
            Metric::ActiveSpan => ["現役期間", "四段昇段日", "四段昇段年齢"],
        }
    }

    /// Rendered metric value and companion values for `player`.
    pub fn cells(&self, player: &Player) -> [String; 3] {
        match self {
            Metric::Age => [
                player.age_text(),
                player.birthday_text(),
                player.active_span_text(),
            ],
            Metric::FourAge => [
                player.four_age_text(),
                player.birthday_text(),
                player.four_day_text(),
            ],
            Metric::ActiveSpan => [
                player.active_span_text(),
                player.four_day_text(),
                player.four_age_text(),
            ],
        }
    }

    /// Sort key in days.
    pub fn key(&self, player: &Player) -> Option<i64> {
        match self {
            Metric::Age => player.age_days,
            Metric::FourAge => player.four_age_days,
            Metric::ActiveSpan => player.active_span_days,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Metric::Age => "age",
            Metric::FourAge => "four-age",
            Metric::ActiveSpan => "active-span",
        })
    }
}

impl FromStr for Metric {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "age" => Ok(Metric::Age),
            "four-age" | "fourAge" => Ok(Metric::FourAge),
            "active-span" | "activeSpan" => Ok(Metric::ActiveSpan),
            other => Err(RosterError::InvalidFilter(format!("unknown metric {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(RosterError::InvalidFilter(format!("unknown sort order {other:?}"))),
        }
    }
}

fn num_or_last(player: &Player) -> u32 {
    player.num.unwrap_or(u32::MAX)
}

/// Sort by a metric. Players without a value for the metric go last,
/// ordered by number, whatever the direction; equal values are ordered by
/// number ascending.
pub fn sort_by_metric<'a>(players: &[&'a Player], metric: Metric, order: SortOrder) -> Vec<&'a Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| match (metric.key(a), metric.key(b)) {
        (None, None) => num_or_last(a).cmp(&num_or_last(b)),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(va), Some(vb)) => {
            let by_value = match order {
                SortOrder::Asc => va.cmp(&vb),
                SortOrder::Desc => vb.cmp(&va),
            };
            by_value.then_with(|| num_or_last(a).cmp(&num_or_last(b)))
        }
    });
    sorted
}

/// Sort into seat order (席次).
pub fn sort_by_seat<'a>(players: &[&'a Player]) -> Vec<&'a Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| compare_seat(&a.seat, &b.seat));
    sorted
}
