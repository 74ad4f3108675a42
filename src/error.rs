//! Error types for gmtree
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and downcasts when it needs to pick an exit code or a message layout.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gmtree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Main error type for gmtree operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// A line does not have the `parent child` shape
    #[error("invalid requirement: \"{line}\" on line {line_number}")]
    MalformedLine { line: String, line_number: usize },

    /// No edges were supplied, so there is no root to build from
    #[error("invalid graph")]
    EmptyGraph,

    /// A filter was supplied but no node satisfied it
    #[error("no node matches the filter {filter}")]
    NoMatch { filter: String },

    /// A node claims a parent whose child list does not contain it
    #[error("corrupt tree: '{node}' is not linked under its parent '{parent}'")]
    CorruptTree { node: String, parent: String },

    /// Stdin is an interactive terminal and no input file was given
    #[error("no input: pipe a module graph into stdin or pass a file")]
    NoInput,

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
