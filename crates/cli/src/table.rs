// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table renderer for `cronline list`.

use std::io::Write;

/// A column definition in a [`Table`].
pub struct Column {
    pub name: &'static str,
    /// Maximum width (`None` = unlimited). Values exceeding this are truncated.
    pub max_width: Option<usize>,
}

impl Column {
    /// Left-aligned column.
    pub fn left(name: &'static str) -> Self {
        Self {
            name,
            max_width: None,
        }
    }

    /// Set maximum width (values exceeding this are truncated).
    pub fn with_max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }
}

/// A tabular renderer that auto-computes column widths from data.
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

/// Column separator: double space.
const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Render the full table (header + rows) to the given writer.
    ///
    /// The last column is never padded.
    pub fn render(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }

        let widths = self.compute_widths();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.name).collect();
        writeln!(out, "{}", self.format_row(&headers, &widths))?;

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            writeln!(out, "{}", self.format_row(&cells, &widths))?;
        }
        Ok(())
    }

    fn format_row(&self, cells: &[&str], widths: &[usize]) -> String {
        let last = self.columns.len().saturating_sub(1);
        self.columns
            .iter()
            .zip(cells)
            .enumerate()
            .map(|(i, (col, raw))| {
                let text = truncate(raw, col.max_width);
                if i == last {
                    text.to_string()
                } else {
                    pad(text, widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join(SEP)
    }

    /// Compute the display width for each column.
    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let max_data = self
                    .rows
                    .iter()
                    .map(|row| {
                        let raw = row.get(i).map(|s| s.chars().count()).unwrap_or(0);
                        match col.max_width {
                            Some(mw) => raw.min(mw),
                            None => raw,
                        }
                    })
                    .max()
                    .unwrap_or(0);
                col.name.len().max(max_data)
            })
            .collect()
    }
}

/// Left-align a string within `width`.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text)
}

/// Truncate a string to at most `max` characters (if set).
fn truncate(s: &str, max: Option<usize>) -> &str {
    match max {
        Some(m) => match s.char_indices().nth(m) {
            Some((idx, _)) => &s[..idx],
            None => s,
        },
        None => s,
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
