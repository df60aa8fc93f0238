use crate::error::RosterError;
use crate::player::Player;
use crate::status::{Dan, Status};
use std::str::FromStr;

/// Player-number filter: one number, or an inclusive range with optional
/// ends (`184`, `184-`, `-200`, `184-200`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumFilter {
    Exact(u32),
    Range { min: Option<u32>, max: Option<u32> },
}

impl NumFilter {
    pub fn matches(&self, num: Option<u32>) -> bool {
        let Some(num) = num else {
            return false;
        };
        match *self {
            NumFilter::Exact(n) => num == n,
            NumFilter::Range { min, max } => {
                min.map_or(true, |m| num >= m) && max.map_or(true, |m| num <= m)
            }
        }
    }
}

impl FromStr for NumFilter {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || RosterError::InvalidFilter(format!("player number {s:?}"));
        let bound = |part: &str| -> Result<Option<u32>, RosterError> {
            let part = part.trim();
            if part.is_empty() {
                Ok(None)
            } else {
                part.parse::<u32>().map(Some).map_err(|_| bad())
            }
        };
        match s.split_once('-') {
            None => s.parse::<u32>().map(NumFilter::Exact).map_err(|_| bad()),
            Some((lo, hi)) => {
                let (min, max) = (bound(lo)?, bound(hi)?);
                if min.is_none() && max.is_none() {
                    return Err(bad());
                }
                Ok(NumFilter::Range { min, max })
            }
        }
    }
}

/// Search conditions; an unset field matches every player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub num: Option<NumFilter>,
    pub dan: Option<Dan>,
    pub status: Option<Status>,
    /// Inclusive bounds on age in whole years. Players with an unknown age
    /// never satisfy a bound.
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
}

impl Filters {
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !player.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(num) = &self.num {
            if !num.matches(player.num) {
                return false;
            }
        }
        if self.dan.is_some_and(|d| d != player.dan) {
            return false;
        }
        if self.status.is_some_and(|s| s != player.status) {
            return false;
        }
        if let Some(min) = self.age_min {
            if player.age_years().map_or(true, |age| age < min) {
                return false;
            }
        }
        if let Some(max) = self.age_max {
            if player.age_years().map_or(true, |age| age > max) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, players: &'a [Player]) -> Vec<&'a Player> {
        players.iter().filter(|p| self.matches(p)).collect()
    }
}
