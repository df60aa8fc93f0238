//! Plain-text tables for the terminal.

/// Column separator of rendered rows.
const SEPARATOR: &str = " | ";

/// Marker prefixed to the first cell of a highlighted row.
pub const MARK: &str = "*";

/// A table rendered as one line per row, cells joined by [`SEPARATOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Push a row, prefixing its first cell with [`MARK`] when `marked`.
    pub fn push_marked_row(&mut self, mut cells: Vec<String>, marked: bool) {
        if marked {
            if let Some(first) = cells.first_mut() {
                first.insert_str(0, MARK);
            }
        }
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header line followed by one line per row. An empty table renders
    /// `empty_text` in place of the rows.
    pub fn render(&self, empty_text: &str) -> String {
        let mut out = self.headers.join(SEPARATOR);
        out.push('\n');
        if self.rows.is_empty() {
            out.push_str(empty_text);
            out.push('\n');
            return out;
        }
        for row in &self.rows {
            out.push_str(&row.join(SEPARATOR));
            out.push('\n');
        }
        out
    }
}
