use crate::tokenizer;
use log::debug;
use std::collections::HashMap;

/// Header-keyed view over parsed CSV rows.
///
/// Header names and field values are trimmed once, when the table is built.
/// Rows are stored as they were read; a row shorter than the header reads as
/// empty strings for the missing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

/// One data row of a [`CsvTable`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a CsvTable,
    values: &'a [String],
}

impl CsvTable {
    /// Tokenize `text` and build a table using its first row as the header.
    /// A leading UTF-8 byte order mark is dropped.
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        to_records(tokenizer::parse(text))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<Record<'_>> {
        self.rows.get(row).map(|values| Record {
            table: self,
            values,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |values| Record {
            table: self,
            values,
        })
    }
}

impl<'a> Record<'a> {
    /// Value of the named column, or `""` when the column is unknown or the
    /// row is too short to reach it.
    pub fn get(&self, column: &str) -> &'a str {
        self.table
            .index
            .get(column)
            .and_then(|&i| self.values.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.table.has_column(column)
    }

    /// Value of the first of `columns` that exists in the header.
    pub fn get_any(&self, columns: &[&str]) -> &'a str {
        columns
            .iter()
            .find(|c| self.table.has_column(c))
            .map(|c| self.get(c))
            .unwrap_or("")
    }

    /// (header, value) pairs in header order, padded with `""`.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        let values = self.values;
        self.table
            .headers
            .iter()
            .enumerate()
            .map(move |(i, h)| (h.as_str(), values.get(i).map(String::as_str).unwrap_or("")))
    }
}

/// Build a [`CsvTable`] from raw rows; row 0 is the header.
///
/// Header names and values are trimmed. Blank lines (a single empty field,
/// or every field empty after trimming) are dropped. When a header name
/// repeats, lookups resolve to its right-most column.
pub fn to_records(rows: Vec<Vec<String>>) -> CsvTable {
    let mut rows = rows.into_iter();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|h| h.trim().to_string()).collect(),
        None => return CsvTable::default(),
    };

    let mut index: HashMap<String, usize> = HashMap::new();
    for (i, h) in headers.iter().enumerate() {
        index.insert(h.clone(), i);
    }

    let mut kept: Vec<Vec<String>> = Vec::new();
    let mut dropped = 0usize;
    for row in rows {
        let row: Vec<String> = row.iter().map(|v| v.trim().to_string()).collect();
        if row.iter().all(|v| v.is_empty()) {
            dropped += 1;
            continue;
        }
        kept.push(row);
    }
    debug!(
        "CSV table: {} columns, {} records, {} blank rows dropped",
        headers.len(),
        kept.len(),
        dropped
    );

    CsvTable {
        headers,
        index,
        rows: kept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_keyed_by_trimmed_header() {
        let table = CsvTable::from_text(" num , name \n 1 , 大山康晴 \n");
        assert_eq!(table.headers(), &["num".to_string(), "name".to_string()]);
        assert_eq!(table.len(), 1);
        let record = table.get(0).unwrap();
        assert_eq!(record.get("num"), "1");
        assert_eq!(record.get("name"), "大山康晴");
    }

    #[test]
    fn test_byte_order_mark_is_not_part_of_first_header() {
        let table = CsvTable::from_text("\u{feff}num,name\n184,江口四郎\n");
        assert_eq!(table.headers()[0], "num");
        assert!(table.has_column("num"));
        assert_eq!(table.get(0).unwrap().get("num"), "184");
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let table = CsvTable::from_text("a,b,c\n1\n");
        let record = table.get(0).unwrap();
        assert_eq!(record.get("a"), "1");
        assert_eq!(record.get("b"), "");
        assert_eq!(record.get("c"), "");
        assert_eq!(record.get("missing"), "");
        let pairs: Vec<(&str, &str)> = record.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", ""), ("c", "")]);
    }

    #[test]
    fn test_blank_rows_are_dropped() {
        let table = CsvTable::from_text("a,b\n\n1,2\n , \n\r\n3,4\n");
        assert_eq!(table.len(), 2);
        let values: Vec<&str> = table.records().map(|r| r.get("a")).collect();
        assert_eq!(values, vec!["1", "3"]);
    }

    #[test]
    fn test_header_only_and_empty_text() {
        assert!(CsvTable::from_text("a,b\n").is_empty());
        assert!(CsvTable::from_text("").is_empty());
        assert!(to_records(Vec::new()).headers().is_empty());
    }

    #[test]
    fn test_quoted_values_keep_inner_commas() {
        let table = CsvTable::from_text("name,note\n\"羽生, 善治\",\"say \"\"hi\"\"\"\n");
        let record = table.get(0).unwrap();
        assert_eq!(record.get("name"), "羽生, 善治");
        assert_eq!(record.get("note"), "say \"hi\"");
    }

    #[test]
    fn test_duplicate_header_uses_rightmost_column() {
        let table = CsvTable::from_text("x,x\n1,2\n");
        assert_eq!(table.get(0).unwrap().get("x"), "2");
    }

    #[test]
    fn test_get_any_prefers_first_existing_column() {
        let table = CsvTable::from_text("birth,name\n2000-01-01,A\n");
        let record = table.get(0).unwrap();
        assert_eq!(record.get_any(&["birthday", "birth"]), "2000-01-01");
        assert_eq!(record.get_any(&["nope"]), "");
    }
}
