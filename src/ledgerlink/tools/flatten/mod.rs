//! Flattening of service reports into a simple labelled tree.
//!
//! The raw report leans on position rather than schema: the first summary cell
//! is usually the label and one of the remaining cells carries the amount. The
//! flattener encodes exactly that heuristic and nothing more, so it copes with
//! every report kind the service produces.

use std::fmt;

use serde::Serialize;

use crate::model::{Cell, Report, Row};

/// Indentation added for each level of nesting when rendering.
pub const INDENT: &str = " ";

/// A simpler, easier to use view of a [`Report`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedReport {
    pub rows: Vec<FormattedRow>,
}

/// One labelled amount together with the lines nested beneath it.
///
/// An empty label means the line is suppressed when rendering; its children
/// are still rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedRow {
    pub label: String,
    pub value: f64,
    pub children: Vec<FormattedRow>,
}

impl FormattedRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<FormattedRow>) -> Self {
        self.children = children;
        self
    }
}

impl Report {
    /// Converts the raw row tree into a [`FormattedReport`].
    pub fn formatted_report(&self) -> FormattedReport {
        FormattedReport {
            rows: flatten_rows(&self.rows.row),
        }
    }
}

/// Flattens raw rows, one formatted row per input row at every level.
pub fn flatten_rows(rows: &[Row]) -> Vec<FormattedRow> {
    rows.iter().map(flatten_row).collect()
}

fn flatten_row(row: &Row) -> FormattedRow {
    let (label, value) = match row.summary.col_data.split_first() {
        Some((first, rest)) => (first.value.clone(), leading_value(rest)),
        None => (String::new(), 0.0),
    };

    FormattedRow {
        label,
        value,
        children: flatten_rows(row.children()),
    }
}

/// First cell that parses as a number, or zero when none does.
pub fn leading_value(cells: &[Cell]) -> f64 {
    cells
        .iter()
        .find_map(|cell| parse_amount(&cell.value))
        .unwrap_or_default()
}

/// Parses a cell amount. Literals too large for `f64` do not count as
/// numbers; only a spelled-out infinity yields an infinite value.
fn parse_amount(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_infinite() {
        let unsigned = text.trim_start_matches(['+', '-']);
        let spelled =
            unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
        return spelled.then_some(value);
    }
    Some(value)
}

impl FormattedReport {
    /// Renders the report as indented `label - amount` lines.
    pub fn render(&self) -> String {
        render_rows(&self.rows, "")
    }

    /// Depth-first search for the first row carrying `label`.
    pub fn find(&self, label: &str) -> Option<&FormattedRow> {
        find_in(&self.rows, label)
    }

    /// Number of rows at every level.
    pub fn len(&self) -> usize {
        fn count(rows: &[FormattedRow]) -> usize {
            rows.iter().map(|row| 1 + count(&row.children)).sum()
        }
        count(&self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for FormattedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.rows, "")
    }
}

/// Renders `rows` with every line prefixed by `prefix`.
pub fn render_rows(rows: &[FormattedRow], prefix: &str) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_rows(&mut output, rows, prefix);
    output
}

fn write_rows<W: fmt::Write>(out: &mut W, rows: &[FormattedRow], prefix: &str) -> fmt::Result {
    for row in rows {
        if !row.label.is_empty() {
            writeln!(out, "{prefix}{} - {:.2}", row.label, row.value)?;
        }
        let nested = format!("{prefix}{INDENT}");
        write_rows(out, &row.children, &nested)?;
    }
    Ok(())
}

fn find_in<'a>(rows: &'a [FormattedRow], label: &str) -> Option<&'a FormattedRow> {
    rows.iter().find_map(|row| {
        if row.label == label {
            Some(row)
        } else {
            find_in(&row.children, label)
        }
    })
}
