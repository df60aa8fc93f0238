use spr_calendar::CalendarError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A non-empty date cell could not be parsed. `row` is the 1-based data
    /// row (the header is not counted).
    #[error("Row {row}, column {column:?}: {source}")]
    InvalidDate {
        row: usize,
        column: String,
        #[source]
        source: CalendarError,
    },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
