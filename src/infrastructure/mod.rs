//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `input` - Line sources (stdin, file, any reader)

pub mod input;

// Re-export for convenience
pub use input::{read_all_lines, read_deferred, FileSource, ReadMode, ReaderSource, StdinSource};
