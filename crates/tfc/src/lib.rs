//! # tfc - listing support for the Terraform Cloud command line client
//!
//! Every `list` command does the same thing: page through an API endpoint up
//! to a limit, turn each result into named fields, and print the fields as a
//! table that fits the terminal. This crate holds the shared pieces:
//!
//! - [`IoStreams`]: stdout/stderr plus the terminal width to render for
//! - [`FieldPrinter`]: records of named fields to table rows
//! - [`ListArgs`]: the `--limit`, `--columns` and `--page-size` flags
//! - [`run_listing`]: the listing control flow
//! - [`Clock`]: a swappable time source for relative timestamps
//! - [`logging`] and [`config`]: process setup
//!
//! The engines live in [`tfc_paging`] and [`tfc_render`] and are re-exported
//! here.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tfc::{run_listing, IoStreams, ListArgs};
//! use tfc::paging::{ListOptions, Page, Pager, Pagination};
//!
//! let mut pager = Pager::new(|opts: &ListOptions| {
//!     let page = opts.page_number.unwrap_or(1);
//!     Ok::<_, std::io::Error>(Page::new(
//!         vec![format!("ws-{}", page)],
//!         Pagination {
//!             current_page: page,
//!             next_page: (page < 5).then_some(page + 1),
//!             total_pages: 5,
//!             total_count: 5,
//!             ..Default::default()
//!         },
//!     ))
//! });
//!
//! let args = ListArgs {
//!     limit: 2,
//!     columns: vec!["NAME".to_string()],
//!     ..Default::default()
//! };
//! let mut streams = IoStreams::test();
//! run_listing(&mut streams, &mut pager, &args, |name| {
//!     HashMap::from([("NAME".to_string(), name.clone())])
//! })
//! .unwrap();
//!
//! assert_eq!(streams.out_string(), "Showing 2 of 5 results\nNAME\nws-1\nws-2\n");
//! ```

pub mod args;
pub mod clock;
pub mod config;
pub mod error;
pub mod iostreams;
pub mod listing;
pub mod logging;
pub mod printer;

pub use tfc_paging as paging;
pub use tfc_render as render;

pub use args::ListArgs;
pub use clock::Clock;
pub use config::Settings;
pub use error::{Error, Result};
pub use iostreams::{IoStreams, DEFAULT_WIDTH};
pub use listing::run_listing;
pub use logging::{LogConfig, LogFormat};
pub use printer::{FieldPrinter, Printer};
