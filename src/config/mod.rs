//! Configuration module for gmtree
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority, applied by `presentation::cli`)
//! 2. Environment variables (GMTREE_*)
//! 3. Config file (`--config <PATH>` or `<user config dir>/gmtree/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env, split_list, user_config_path, ConfigWarning, ENV_CHARSET, ENV_DEBUG, ENV_FILTER,
    ENV_FILTER_NO_VERSION, ENV_INDENT,
};
pub use types::{
    Config, FilterConfig, InputConfig, LogConfig, RenderConfig, DEFAULT_GRACE_PERIOD_MS,
};
