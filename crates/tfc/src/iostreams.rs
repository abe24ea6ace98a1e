//! The output streams a command writes to.

use std::io::{self, Stderr, Stdout};

use tfc_render::Sink;

/// Width assumed when the output is not a terminal.
pub const DEFAULT_WIDTH: usize = 80;

/// Standard output and error for one command invocation.
///
/// Commands never touch `stdout`/`stderr` directly; they write through the
/// streams so tests can swap in buffers with [`IoStreams::test`].
#[derive(Debug)]
pub struct IoStreams<O: Sink = Stdout, E: Sink = Stderr> {
    pub out: O,
    pub err_out: E,
    width_override: Option<usize>,
}

impl IoStreams {
    /// Streams bound to the process's stdout and stderr.
    pub fn system() -> Self {
        IoStreams::new(io::stdout(), io::stderr())
    }
}

impl IoStreams<Vec<u8>, Vec<u8>> {
    /// Streams writing into in-memory buffers.
    pub fn test() -> Self {
        IoStreams::new(Vec::new(), Vec::new())
    }

    /// Everything written to `out` so far, lossily decoded.
    pub fn out_string(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Everything written to `err_out` so far, lossily decoded.
    pub fn err_string(&self) -> String {
        String::from_utf8_lossy(&self.err_out).into_owned()
    }
}

impl<O: Sink, E: Sink> IoStreams<O, E> {
    pub fn new(out: O, err_out: E) -> Self {
        IoStreams {
            out,
            err_out,
            width_override: None,
        }
    }

    /// Force the terminal width, regardless of what the output reports.
    /// 0 removes the override.
    pub fn override_terminal_width(&mut self, width: usize) {
        self.width_override = (width > 0).then_some(width);
    }

    /// Width tables should fit into: the override, else the width of the
    /// terminal behind `out`, else [`DEFAULT_WIDTH`].
    pub fn terminal_width(&self) -> usize {
        self.width_override
            .or_else(|| self.out.terminal_width().filter(|w| *w > 0))
            .unwrap_or(DEFAULT_WIDTH)
    }

    /// Whether `out` is attached to a terminal.
    pub fn is_terminal_output(&self) -> bool {
        self.out.terminal_width().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_use_default_width() {
        let streams = IoStreams::test();
        assert_eq!(streams.terminal_width(), DEFAULT_WIDTH);
        assert!(!streams.is_terminal_output());
    }

    #[test]
    fn override_wins_until_cleared() {
        let mut streams = IoStreams::test();
        streams.override_terminal_width(120);
        assert_eq!(streams.terminal_width(), 120);
        streams.override_terminal_width(0);
        assert_eq!(streams.terminal_width(), DEFAULT_WIDTH);
    }
}
