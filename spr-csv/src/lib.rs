//! Quote-aware CSV tokenizer and header-keyed records for the player roster.
//!
//! [`tokenizer::parse`] turns text into raw rows; [`table::to_records`]
//! turns raw rows into a [`CsvTable`] keyed by the trimmed header row.

pub mod table;
pub mod tokenizer;

pub use table::{to_records, CsvTable, Record};
pub use tokenizer::parse;
