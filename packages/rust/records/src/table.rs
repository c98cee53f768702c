//! Untyped view of the log: headers plus string rows.
//!
//! Appends go through this view so legacy columns survive the rewrite.

use crate::record::{BACKFILL_COLUMNS, COLUMNS, ScreeningRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of `name` in the header row.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Add `name` as a trailing column (empty in existing rows) if missing.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    /// Bring the table up to the current schema, then append `record`.
    pub fn push_record(&mut self, record: &ScreeningRecord) {
        if self.headers.is_empty() {
            self.headers = COLUMNS.iter().map(|c| c.to_string()).collect();
        }
        for name in BACKFILL_COLUMNS.iter().chain(COLUMNS.iter()) {
            self.ensure_column(name);
        }

        let row = self
            .headers
            .iter()
            .map(|h| record.value(h).unwrap_or_default())
            .collect();
        self.rows.push(row);
    }

    /// Pad short rows to the header width. Rows wider than the header get
    /// placeholder columns (`Column_<n>`) so no cell is dropped on rewrite.
    pub(crate) fn normalize_width(&mut self) {
        let widest = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        while self.headers.len() < widest {
            let name = format!("Column_{}", self.headers.len() + 1);
            self.headers.push(name);
        }
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }
}
