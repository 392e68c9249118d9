//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
    pub numeric: bool,
}

impl Column {
    pub fn text(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            numeric: false,
        }
    }

    /// Right-aligned column.
    pub fn number(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            numeric: true,
        }
    }

    fn cell(&self, value: &str) -> String {
        if self.numeric {
            pad_left(value, self.width)
        } else {
            pad_right(value, self.width)
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

    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.cell(&c.header)).collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| col.cell(row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}
