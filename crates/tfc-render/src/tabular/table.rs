//! Row-accumulating table renderer.

use std::io::{self, Write};

use super::column::Column;
use super::resolve::{resolve_widths, ResolvedWidths};
use crate::sink::Sink;
use crate::text::{display_width, pad_right, truncate};

/// Separator written between adjacent cells.
pub const DELIMITER: &str = "  ";

/// A table that collects rows and writes them as an aligned grid.
///
/// Columns are either supplied up front with [`columns`](Table::columns) or
/// inferred from the rows: a row with more cells than there are columns adds
/// header-less columns. Nothing is written until [`render`](Table::render),
/// which first shrinks truncatable columns to fit the maximum width.
///
/// # Example
///
/// ```rust
/// use tfc_render::tabular::{Column, Table};
///
/// let mut table = Table::new(Vec::new())
///     .columns([Column::new("ID").no_truncate(), Column::new("NAME")]);
/// table.add_row(["ws-1", "production"]);
/// table.add_row(["ws-22", "staging"]);
/// table.render().unwrap();
///
/// let out = String::from_utf8(table.into_inner()).unwrap();
/// assert_eq!(out, "ID     NAME\nws-1   production\nws-22  staging\n");
/// ```
#[derive(Debug)]
pub struct Table<W: Sink> {
    out: W,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    max_width: usize,
}

impl<W: Sink> Table<W> {
    /// Create a table writing to `out`.
    ///
    /// The maximum width is the sink's terminal width, or unconstrained when
    /// the sink is not a terminal.
    pub fn new(out: W) -> Self {
        let max_width = out.terminal_width().unwrap_or(0);
        Table {
            out,
            columns: Vec::new(),
            rows: Vec::new(),
            max_width,
        }
    }

    /// Use an explicit, ordered list of columns.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = Column>,
    {
        self.columns = columns.into_iter().collect();
        for row in &self.rows {
            fit_columns(&mut self.columns, row);
        }
        self
    }

    /// Override the maximum table width. 0 disables shrinking.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Append a row.
    ///
    /// Embedded newlines are replaced by a literal `\n` so every row stays on
    /// one line.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row: Vec<String> = cells
            .into_iter()
            .map(|cell| cell.as_ref().replace('\n', "\\n"))
            .collect();
        fit_columns(&mut self.columns, &row);
        self.rows.push(row);
    }

    /// The table's columns, with widths grown to the content seen so far.
    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows added so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows have been added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widths the next [`render`](Table::render) will use, after shrinking.
    pub fn column_widths(&self) -> Vec<usize> {
        self.resolved_widths().widths
    }

    fn resolved_widths(&self) -> ResolvedWidths {
        resolve_widths(&self.columns, display_width(DELIMITER), self.max_width)
    }

    /// Write the header (if any column has one) and every row.
    ///
    /// Column state is not modified, so rendering again produces the same
    /// output.
    pub fn render(&mut self) -> io::Result<()> {
        let widths = self.resolved_widths();
        let last = self.columns.len().saturating_sub(1);

        tracing::debug!(
            rows = self.len(),
            columns = self.columns.len(),
            max_width = self.max_width,
            "rendering table"
        );

        if self.columns.iter().any(|c| !c.header().is_empty()) {
            let headers: Vec<&str> = self.columns.iter().map(Column::header).collect();
            write_row(&mut self.out, &widths, last, &headers)?;
        }

        for row in &self.rows {
            write_row(&mut self.out, &widths, last, row)?;
        }

        self.out.flush()
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the table, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn fit_columns(columns: &mut Vec<Column>, row: &[String]) {
    if row.len() > columns.len() {
        columns.resize_with(row.len(), Column::default);
    }
    for (column, cell) in columns.iter_mut().zip(row) {
        column.observe(display_width(cell));
    }
}

fn write_row<W, S>(
    out: &mut W,
    widths: &ResolvedWidths,
    last: usize,
    cells: &[S],
) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.write_all(DELIMITER.as_bytes())?;
        }
        let cell = cell.as_ref();
        let width = widths.get(i).unwrap_or(0);
        if display_width(cell) > width {
            out.write_all(truncate(cell, width).as_bytes())?;
        } else if i == last {
            out.write_all(cell.as_bytes())?;
        } else {
            out.write_all(pad_right(cell, width).as_bytes())?;
        }
    }
    out.write_all(b"\n")
}
