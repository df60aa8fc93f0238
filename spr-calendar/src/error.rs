use thiserror::Error;

/// Errors produced while parsing or aggregating calendar dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The input does not have the `YYYY-MM-DD` shape.
    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// The input has the right shape but names a day that does not exist,
    /// e.g. `2026-02-30`.
    #[error("Impossible date: {0}")]
    ImpossibleDate(String),

    /// An average was requested over an empty set of dates.
    #[error("Insufficient data: cannot average an empty set of dates")]
    InsufficientData,

    #[error("Date out of supported range: {0}")]
    OutOfRange(String),
}
