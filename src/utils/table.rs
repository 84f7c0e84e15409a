//! Table rendering utilities for CLI outputs.
//!
//! Widths are terminal columns (CJK-aware), and cells longer than their
//! column are wrapped onto continuation lines instead of truncated.

use crate::utils::formatting::pad_right;
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    /// Wrap overlong cells instead of truncating (title/details column).
    pub wrap: bool,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            wrap: false,
        }
    }

    pub fn wrapped(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            wrap: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn separator(&self) -> String {
        let total: usize = self.columns.iter().map(|c| c.width + 2).sum();
        "-".repeat(total)
    }

    /// Split one logical row into physical lines (wrapping wrap-columns).
    fn row_lines(&self, row: &[String]) -> Vec<Vec<String>> {
        let mut cells: Vec<Vec<String>> = Vec::new();

        for (i, col) in self.columns.iter().enumerate() {
            let cell = row.get(i).cloned().unwrap_or_default();
            if col.wrap && UnicodeWidthStr::width(cell.as_str()) > col.width {
                cells.push(wrap(&cell, col.width).into_iter().map(|l| l.into_owned()).collect());
            } else {
                cells.push(vec![cell]);
            }
        }

        let height = cells.iter().map(|c| c.len()).max().unwrap_or(1);
        let mut lines = Vec::with_capacity(height);
        for h in 0..height {
            lines.push(
                cells
                    .iter()
                    .map(|c| c.get(h).cloned().unwrap_or_default())
                    .collect(),
            );
        }
        lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');
        out.push_str(&self.separator());
        out.push('\n');

        // Rows
        for row in &self.rows {
            for line in self.row_lines(row) {
                for (i, col) in self.columns.iter().enumerate() {
                    out.push_str(&pad_right(&line[i], col.width));
                    out.push_str("  ");
                }
                out.push('\n');
            }
        }

        out
    }
}
