use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Career status of a player, derived from the roster's marker columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Retired,
    Deceased,
    Withdrawn,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "現役",
            Status::Retired => "引退",
            Status::Deceased => "物故",
            Status::Withdrawn => "退会",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "現役" => Ok(Status::Active),
            "retired" | "引退" => Ok(Status::Retired),
            "deceased" | "物故" => Ok(Status::Deceased),
            "withdrawn" | "退会" => Ok(Status::Withdrawn),
            other => Err(RosterError::InvalidFilter(format!("unknown status {other:?}"))),
        }
    }
}

/// Professional rank (dan). Ranks are ordered, `Unknown` lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dan {
    Unknown,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Dan {
    /// Ranks that have a promotion-date column, highest first.
    pub const PROMOTED: [Dan; 6] = [Dan::Nine, Dan::Eight, Dan::Seven, Dan::Six, Dan::Five, Dan::Four];

    pub fn label(&self) -> &'static str {
        match self {
            Dan::Nine => "九段",
            Dan::Eight => "八段",
            Dan::Seven => "七段",
            Dan::Six => "六段",
            Dan::Five => "五段",
            Dan::Four => "四段",
            Dan::Unknown => "不明",
        }
    }

    /// 9 for nine-dan down to 4 for four-dan; 0 when unknown.
    pub fn rank(&self) -> u8 {
        match self {
            Dan::Nine => 9,
            Dan::Eight => 8,
            Dan::Seven => 7,
            Dan::Six => 6,
            Dan::Five => 5,
            Dan::Four => 4,
            Dan::Unknown => 0,
        }
    }
}

impl fmt::Display for Dan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Dan {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "9" | "nine" | "九段" => Ok(Dan::Nine),
            "8" | "eight" | "八段" => Ok(Dan::Eight),
            "7" | "seven" | "七段" => Ok(Dan::Seven),
            "6" | "six" | "六段" => Ok(Dan::Six),
            "5" | "five" | "五段" => Ok(Dan::Five),
            "4" | "four" | "四段" => Ok(Dan::Four),
            "unknown" | "不明" => Ok(Dan::Unknown),
            other => Err(RosterError::InvalidFilter(format!("unknown dan {other:?}"))),
        }
    }
}
