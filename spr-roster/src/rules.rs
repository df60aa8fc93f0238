//! Column names and classification rules for the roster CSV.

use crate::status::{Dan, Status};
use spr_csv::Record;

/// Names of the roster CSV columns the derivation reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub num: String,
    pub name: String,
    /// Birth date column; the first name present in the header is used.
    pub birthday: Vec<String>,
    pub four: String,
    pub five: String,
    pub six: String,
    pub seven: String,
    pub eight: String,
    pub nine: String,
    pub retire: String,
    pub passing: String,
    pub withdraw: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            num: "num".to_string(),
            name: "name".to_string(),
            birthday: vec!["birthday".to_string(), "birth".to_string()],
            four: "four-day".to_string(),
            five: "five-day".to_string(),
            six: "six-day".to_string(),
            seven: "seven-day".to_string(),
            eight: "eight-day".to_string(),
            nine: "nine-day".to_string(),
            retire: "retire".to_string(),
            passing: "passing".to_string(),
            withdraw: "withdraw".to_string(),
        }
    }
}

/// Current title holders, ranked first in seat order in this order.
pub const TITLE_HOLDERS: [&str; 7] = [
    "藤井聡太",
    "伊藤匠",
    "谷川浩司",
    "羽生善治",
    "佐藤康光",
    "森内俊之",
    "渡辺明",
];

/// Roster rules: column layout plus the title-holder list used for seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub columns: Columns,
    pub title_holders: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            title_holders: TITLE_HOLDERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Rules {
    /// Status by first match: Deceased, then Retired, then Withdrawn, else
    /// Active. Only the emptiness of each marker column matters.
    pub fn classify(&self, record: &Record<'_>) -> Status {
        let c = &self.columns;
        if !record.get(&c.passing).is_empty() {
            Status::Deceased
        } else if !record.get(&c.retire).is_empty() {
            Status::Retired
        } else if !record.get(&c.withdraw).is_empty() {
            Status::Withdrawn
        } else {
            Status::Active
        }
    }

    /// Highest rank whose promotion-date column is non-empty.
    pub fn derive_dan(&self, record: &Record<'_>) -> Dan {
        Dan::PROMOTED
            .into_iter()
            .find(|dan| {
                self.promotion_column(*dan)
                    .is_some_and(|col| !record.get(col).is_empty())
            })
            .unwrap_or(Dan::Unknown)
    }

    /// Column holding the date of promotion to `dan`.
    pub fn promotion_column(&self, dan: Dan) -> Option<&str> {
        let c = &self.columns;
        match dan {
            Dan::Nine => Some(&c.nine),
            Dan::Eight => Some(&c.eight),
            Dan::Seven => Some(&c.seven),
            Dan::Six => Some(&c.six),
            Dan::Five => Some(&c.five),
            Dan::Four => Some(&c.four),
            Dan::Unknown => None,
        }
    }

    /// Position in the title-holder list, if `name` is a title holder.
    pub fn title_rank(&self, name: &str) -> Option<usize> {
        self.title_holders.iter().position(|t| t == name)
    }

    /// First birth date column present in the record's header.
    pub fn birthday_column(&self, record: &Record<'_>) -> Option<&str> {
        self.columns
            .birthday
            .iter()
            .map(String::as_str)
            .find(|c| record.has_column(c))
    }

    /// Raw birth date cell of a record.
    pub fn birthday<'a>(&self, record: &Record<'a>) -> &'a str {
        self.birthday_column(record)
            .map(|c| record.get(c))
            .unwrap_or("")
    }
}
