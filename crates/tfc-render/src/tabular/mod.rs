//! Aligned, terminal-width aware tables.
//!
//! A [`Table`] collects rows of string cells, grows each [`Column`] to the
//! widest cell it has seen, and on render shrinks the truncatable columns
//! proportionally so the whole grid fits the terminal. Cells that no longer
//! fit are cut with an ellipsis; the rest are padded so columns line up.
//!
//! ```rust
//! use tfc_render::tabular::Table;
//!
//! let mut table = Table::new(Vec::new());
//! table.add_row(["1", "2"]);
//! table.add_row(["123", "456"]);
//! table.render().unwrap();
//!
//! assert_eq!(String::from_utf8(table.into_inner()).unwrap(), "1    2\n123  456\n");
//! ```

mod column;
mod resolve;
mod table;

pub use column::Column;
pub use resolve::{resolve_widths, ResolvedWidths};
pub use table::{Table, DELIMITER};
