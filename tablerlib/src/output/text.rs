//! Text rendering for tables.
//!
//! Each column is as wide as its widest body cell (and its name, when
//! headings are shown). Cells are left-justified to that width and joined
//! with the row's own separator, so every line of a table that uses one
//! separator has the same length. Divider rules are lines of `-` matching
//! the line rendered just before them.

use serde::Serialize;

use crate::row::{Row, DEFAULT_SEPARATOR};
use crate::table::{Divider, Table};

/// Options controlling how a table is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatOptions {
    /// Prepend a heading line with the column names
    pub headings: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { headings: true }
    }
}

impl FormatOptions {
    /// Default options: headings shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: show or hide the heading line
    pub fn with_headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }

    /// Builder: hide the heading line
    pub fn without_headings(self) -> Self {
        self.with_headings(false)
    }
}

/// Number of characters a cell occupies.
fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Compute the display width of every column.
///
/// A column is as wide as its widest body cell; with `headings` the column
/// name counts too. An empty body gives 0, or the name length.
pub fn column_widths(table: &Table, headings: bool) -> Vec<usize> {
    let mut widths: Vec<usize> = if headings {
        table.schema().iter().map(text_width).collect()
    } else {
        vec![0; table.schema().len()]
    };

    for row in table.body() {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(text_width(cell));
        }
    }

    widths
}

/// Left-justify each cell and join with the row separator.
fn render_line(row: &Row, widths: &[usize]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(row.separator())
}

/// Width of a full line joined with the default separator.
fn full_width(widths: &[usize]) -> usize {
    let gaps = widths.len().saturating_sub(1);
    widths.iter().sum::<usize>() + gaps * text_width(DEFAULT_SEPARATOR)
}

fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Render a table as aligned text.
///
/// Every line, dividers included, ends with a line break. A table with no
/// lines to show renders as the empty string.
pub fn render(table: &Table, options: &FormatOptions) -> String {
    let widths = column_widths(table, options.headings);
    let body: Vec<String> = table
        .body()
        .iter()
        .map(|row| render_line(row, &widths))
        .collect();

    let mut lines: Vec<String> = Vec::with_capacity(body.len() + 1);
    if options.headings {
        lines.push(render_line(table.heading(), &widths));
    }

    if table.has_divider(Divider::Top) {
        // Sized from the heading line, else the first body line.
        let width = lines
            .last()
            .or_else(|| body.first())
            .map(|line| text_width(line))
            .unwrap_or_else(|| full_width(&widths));
        lines.push(rule(width));
    }

    for (index, line) in body.into_iter().enumerate() {
        let width = text_width(&line);
        lines.push(line);
        if table.has_divider(Divider::After(index)) {
            lines.push(rule(width));
        }
    }

    lines.into_iter().map(|line| line + "\n").collect()
}
