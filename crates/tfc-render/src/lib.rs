//! Rendering primitives for the `tfc` command line client.
//!
//! - [`text`]: display-width measurement, truncation and padding, plus small
//!   formatting helpers used by listing commands.
//! - [`tabular`]: the column model and the table renderer.
//! - [`sink`]: writers that can report the width of their terminal.

pub mod sink;
pub mod tabular;
pub mod text;

pub use sink::Sink;
pub use tabular::{Column, Table};
