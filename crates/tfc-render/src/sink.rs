//! Output sinks that can report the width of the terminal behind them.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, IsTerminal, Stderr, StderrLock, Stdout, StdoutLock, Write};

/// A writer a [`Table`](crate::tabular::Table) renders into.
///
/// Sinks attached to a terminal report its width so the table can shrink to
/// fit. Everything else (files, pipes, in-memory buffers) reports `None` and
/// the table renders at its natural width.
pub trait Sink: Write {
    /// Width of the attached terminal in columns, if any.
    fn terminal_width(&self) -> Option<usize> {
        None
    }
}

impl Sink for Stdout {
    fn terminal_width(&self) -> Option<usize> {
        self.is_terminal().then(|| width_of(self)).flatten()
    }
}

impl Sink for StdoutLock<'_> {
    fn terminal_width(&self) -> Option<usize> {
        self.is_terminal().then(|| width_of(self)).flatten()
    }
}

impl Sink for Stderr {
    fn terminal_width(&self) -> Option<usize> {
        self.is_terminal().then(|| width_of(self)).flatten()
    }
}

impl Sink for StderrLock<'_> {
    fn terminal_width(&self) -> Option<usize> {
        self.is_terminal().then(|| width_of(self)).flatten()
    }
}

impl Sink for File {
    fn terminal_width(&self) -> Option<usize> {
        self.is_terminal().then(|| width_of(self)).flatten()
    }
}

impl Sink for Vec<u8> {}

impl Sink for Cursor<Vec<u8>> {}

impl Sink for io::Sink {}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn terminal_width(&self) -> Option<usize> {
        (**self).terminal_width()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn terminal_width(&self) -> Option<usize> {
        (**self).terminal_width()
    }
}

impl<S: Sink> Sink for BufWriter<S> {
    fn terminal_width(&self) -> Option<usize> {
        self.get_ref().terminal_width()
    }
}

#[cfg(unix)]
fn width_of<T: std::os::fd::AsFd>(handle: T) -> Option<usize> {
    terminal_size::terminal_size_of(handle).map(|(w, _)| w.0 as usize)
}

#[cfg(windows)]
fn width_of<T: std::os::windows::io::AsHandle>(handle: T) -> Option<usize> {
    terminal_size::terminal_size_of(handle).map(|(w, _)| w.0 as usize)
}

#[cfg(not(any(unix, windows)))]
fn width_of<T>(_handle: T) -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
