//! LineSource port - abstraction over where edge lines come from
//!
//! The validator and builder need the complete edge list up front, so a
//! source hands over every line at once rather than streaming them.

use crate::error::TreeResult;

/// Abstract input of `parent child` lines
///
/// Implementations:
/// - `StdinSource` - standard input, optionally with a deferred read
/// - `FileSource` - a file on disk
/// - `ReaderSource` - any `BufRead`, used by tests
pub trait LineSource {
    /// Short label for diagnostics ("stdin", a file path)
    fn describe(&self) -> String;

    /// Read all lines until the input is exhausted.
    ///
    /// Line terminators (`\n` or `\r\n`) are not part of the returned lines.
    fn read_lines(&mut self) -> TreeResult<Vec<String>>;
}
