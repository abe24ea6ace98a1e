//! Printing records as table rows, one column per field.

use std::collections::HashMap;
use std::io;

use tfc_render::{Column, Sink, Table};

use crate::iostreams::IoStreams;

/// Something that prints records made of named fields.
pub trait Printer {
    /// Field names, in output order.
    fn fields(&self) -> &[String];

    /// Queue one record.
    fn write(&mut self, record: &HashMap<String, String>);

    /// Write everything queued so far.
    fn flush(&mut self) -> io::Result<()>;
}

/// A [`Printer`] that lays records out as a table on the streams' output.
///
/// Each field becomes a column headed by the field name, and the table is
/// fitted to the streams' terminal width.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use tfc::{FieldPrinter, IoStreams, Printer};
///
/// let mut streams = IoStreams::test();
/// let mut printer = FieldPrinter::new(&mut streams, ["NAME", "STATUS"]);
///
/// let record = HashMap::from([("NAME".to_string(), "prod".to_string())]);
/// printer.write(&record);
/// printer.flush().unwrap();
/// drop(printer);
///
/// assert_eq!(streams.out_string(), "NAME  STATUS\nprod  \n");
/// ```
pub struct FieldPrinter<'a, O: Sink> {
    table: Table<&'a mut O>,
    fields: Vec<String>,
}

impl<'a, O: Sink> FieldPrinter<'a, O> {
    pub fn new<E, I, S>(streams: &'a mut IoStreams<O, E>, fields: I) -> Self
    where
        E: Sink,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let max_width = streams.terminal_width();
        let table = Table::new(&mut streams.out)
            .max_width(max_width)
            .columns(fields.iter().map(|field| Column::new(field.as_str())));

        FieldPrinter { table, fields }
    }
}

impl<O: Sink> Printer for FieldPrinter<'_, O> {
    fn fields(&self) -> &[String] {
        &self.fields
    }

    fn write(&mut self, record: &HashMap<String, String>) {
        if self.fields.is_empty() {
            return;
        }

        let row = self
            .fields
            .iter()
            .map(|field| record.get(field).map_or("", String::as_str));
        self.table.add_row(row);
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fields.is_empty() {
            return Ok(());
        }
        self.table.render()
    }
}
