//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Charset;
use crate::error::{TreeError, TreeResult};

use super::types::Config;

pub const ENV_INDENT: &str = "GMTREE_INDENT";
pub const ENV_CHARSET: &str = "GMTREE_CHARSET";
pub const ENV_FILTER: &str = "GMTREE_FILTER";
pub const ENV_FILTER_NO_VERSION: &str = "GMTREE_FILTER_NO_VERSION";
pub const ENV_DEBUG: &str = "GMTREE_DEBUG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key in a config file that no setting reads
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// An environment variable whose value could not be parsed
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(
                f,
                "ignoring {}='{}': expected {}",
                var, value, expected
            ),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text as if it had been read from `path`.
pub fn parse_with_warnings(content: &str, path: &Path) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the explicit file, the user config, or defaults, then apply
/// environment overrides.
///
/// An explicit path must exist. The user config is optional, but once
/// present it must parse.
pub fn load_or_default(explicit: Option<&Path>) -> TreeResult<(Config, Vec<ConfigWarning>)> {
    let (config, mut warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|path| path.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    let (config, env_warnings) = with_env_overrides(config);
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

/// `<user config dir>/gmtree/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gmtree").join("config.toml"))
}

/// Apply environment variable overrides (GMTREE_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_env(config, |var| std::env::var(var).ok())
}

/// Apply overrides read through `lookup` instead of the process environment
pub fn apply_env<F>(mut config: Config, lookup: F) -> (Config, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // GMTREE_INDENT
    if let Some(value) = lookup(ENV_INDENT) {
        match value.trim().parse::<usize>() {
            Ok(indent) => config.render.indent = indent,
            Err(_) => warnings.push(ConfigWarning::InvalidEnv {
                var: ENV_INDENT,
                value,
                expected: "a non-negative integer",
            }),
        }
    }

    // GMTREE_CHARSET
    if let Some(value) = lookup(ENV_CHARSET) {
        match Charset::parse(&value) {
            Some(charset) => config.render.charset = charset,
            None => warnings.push(ConfigWarning::InvalidEnv {
                var: ENV_CHARSET,
                value,
                expected: "unicode or ascii",
            }),
        }
    }

    // GMTREE_FILTER / GMTREE_FILTER_NO_VERSION (comma-separated)
    if let Some(value) = lookup(ENV_FILTER) {
        config.filter.exact = split_list(&value);
    }
    if let Some(value) = lookup(ENV_FILTER_NO_VERSION) {
        config.filter.no_version = split_list(&value);
    }

    // GMTREE_DEBUG
    if let Some(value) = lookup(ENV_DEBUG) {
        match parse_bool(&value) {
            Some(debug) => config.log.debug = debug,
            None => warnings.push(ConfigWarning::InvalidEnv {
                var: ENV_DEBUG,
                value,
                expected: "1, 0, true or false",
            }),
        }
    }

    (config, warnings)
}

/// Split a comma-separated list, dropping blanks
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "render",
        "indent",
        "charset",
        "filter",
        "exact",
        "no_version",
        "input",
        "grace_period_ms",
        "log",
        "debug",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
