//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Flags sit on top of the config hierarchy: a flag that is given wins
//!   over environment variables and config files
//! - List flags accept repetition and comma-separated values alike

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::Config;
use crate::domain::value_objects::Charset;

use super::output::OutputFormat;

/// gmtree - render `go mod graph` output as a tree
#[derive(Parser, Debug)]
#[command(name = "gmtree")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "go mod graph | gmtree (> tree_file_path)\n       gmtree [OPTIONS] [FILE]")]
pub struct Cli {
    /// Width of the connector fill and of each indentation column
    #[arg(short, long, value_name = "N")]
    pub indent: Option<usize>,

    /// Keep only these exact identifiers (with version) and their ancestors
    #[arg(short, long, value_name = "ID", value_delimiter = ',')]
    pub filter: Vec<String>,

    /// Keep only these identifiers, whatever their @version, and their ancestors
    #[arg(short = 'n', long, value_name = "NAME", value_delimiter = ',')]
    pub filter_no_version: Vec<String>,

    /// Print diagnostic tracing to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Draw connectors with ASCII characters
    #[arg(long)]
    pub ascii: bool,

    /// Emit the tree as nested JSON
    #[arg(long)]
    pub json: bool,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read the module graph from FILE instead of stdin ("-" for stdin)
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Layer the given flags over `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(indent) = self.indent {
            config.render.indent = indent;
        }
        if self.ascii {
            config.render.charset = Charset::Ascii;
        }
        if !self.filter.is_empty() {
            config.filter.exact = self.filter.clone();
        }
        if !self.filter_no_version.is_empty() {
            config.filter.no_version = self.filter_no_version.clone();
        }
        if self.debug {
            config.log.debug = true;
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Input file, or `None` when stdin should be read
    pub fn input_file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}
