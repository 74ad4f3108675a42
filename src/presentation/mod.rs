//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Flag definitions and how they layer over the config
//! - `output` - Tree writers

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{create_writer, JsonOutput, OutputFormat, TextOutput, TreeWriter};
