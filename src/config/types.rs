//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::services::{RenderOptions, DEFAULT_INDENT};
use crate::domain::value_objects::{Charset, NodeFilter};
use crate::error::TreeResult;

use super::loader::{self, ConfigWarning};

/// Default time to wait for piped input on MinGW
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 2000;

/// Tree drawing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default)]
    pub charset: Charset,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            charset: Charset::default(),
        }
    }
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Identifiers to prune the tree down to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Exact identifiers, version included
    #[serde(default)]
    pub exact: Vec<String>,

    /// Base identifiers matched regardless of `@version`
    #[serde(default)]
    pub no_version: Vec<String>,
}

/// Input acquisition configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// How long a deferred stdin read may take before the lines are used
    #[serde(default = "default_grace_period_ms")]
    pub grace_period_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            grace_period_ms: default_grace_period_ms(),
        }
    }
}

fn default_grace_period_ms() -> u64 {
    DEFAULT_GRACE_PERIOD_MS
}

/// Diagnostic logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub debug: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults, then apply
    /// `GMTREE_*` environment overrides
    pub fn load_or_default(explicit: Option<&Path>) -> TreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (GMTREE_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }

    /// Combined keep-predicate for the pruner
    pub fn node_filter(&self) -> NodeFilter {
        NodeFilter::new()
            .with_exact(self.filter.exact.iter().cloned())
            .with_no_version(self.filter.no_version.iter().cloned())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.render.indent, self.render.charset)
    }

    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.input.grace_period_ms)
    }
}
