//! The shared body of every `list` command.

use std::collections::HashMap;
use std::io::Write;

use tfc_paging::{collect_limited, ListOptions, Listing, Page, Pager};
use tfc_render::Sink;

use crate::args::ListArgs;
use crate::error::{Error, Result};
use crate::iostreams::IoStreams;
use crate::printer::{FieldPrinter, Printer};

/// Fetch up to `args.limit` results and print them as a table.
///
/// The columns are `args.columns`; commands fill in their defaults (see
/// [`ListArgs::columns_or`]) before calling. Each item is turned into a
/// record by `to_fields`, keyed by column name. When the limit hides part of
/// the result set, a `Showing N of M results` line precedes the table.
///
/// Returns the collected listing so callers can inspect the totals.
pub fn run_listing<O, W, T, E, F, M>(
    streams: &mut IoStreams<O, W>,
    pager: &mut Pager<T, E, F>,
    args: &ListArgs,
    mut to_fields: M,
) -> Result<Listing<T>>
where
    O: Sink,
    W: Sink,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    F: FnMut(&ListOptions) -> std::result::Result<Page<T>, E>,
    M: FnMut(&T) -> HashMap<String, String>,
{
    pager.set_page_size(args.page_size());
    let listing = collect_limited(pager, args.limit, |_| true).map_err(Error::fetch)?;

    if listing.reached_limit {
        writeln!(
            streams.out,
            "Showing {} of {} results",
            listing.items.len(),
            listing.total_count()
        )?;
    }

    let mut printer = FieldPrinter::new(streams, args.columns_or(&[]));
    for item in &listing.items {
        printer.write(&to_fields(item));
    }
    printer.flush()?;

    Ok(listing)
}
