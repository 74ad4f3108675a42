//! Node filter value object
//!
//! Combines the two supported filter kinds into one keep-predicate:
//! - exact identifiers (`golang.org/x/text@v0.3.0`)
//! - base identifiers matched regardless of the `@version` suffix
//!   (`golang.org/x/text`)

use std::collections::BTreeSet;
use std::fmt;

/// Separator between a module path and its version
const VERSION_SEPARATOR: char = '@';

/// Strip a trailing `@version` suffix from an identifier.
///
/// A leading `@` (as in `@scope/pkg`) is part of the name, not a version
/// separator, so `@scope/pkg` is returned unchanged while
/// `@scope/pkg@1.0.0` becomes `@scope/pkg`.
pub fn base_identifier(name: &str) -> &str {
    match name.rsplit_once(VERSION_SEPARATOR) {
        Some((base, _)) if !base.is_empty() => base,
        _ => name,
    }
}

/// Union of exact and version-less identifier sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilter {
    exact: BTreeSet<String>,
    no_version: BTreeSet<String>,
}

impl NodeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add exact identifiers
    pub fn with_exact<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exact.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add base identifiers; any version suffix on the input is ignored too
    pub fn with_no_version<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.no_version.extend(
            names
                .into_iter()
                .map(Into::into)
                .map(|name| base_identifier(&name).to_string()),
        );
        self
    }

    /// Returns true if no identifiers were supplied (pruning is skipped)
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.no_version.is_empty()
    }

    /// Check a node name against both sets
    pub fn matches(&self, name: &str) -> bool {
        self.exact.contains(name) || self.no_version.contains(base_identifier(name))
    }
}

impl fmt::Display for NodeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let all: Vec<String> = self
            .exact
            .iter()
            .cloned()
            .chain(self.no_version.iter().map(|name| format!("{name}@*")))
            .collect();
        write!(f, "[{}]", all.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_identifier_strips_version() {
        assert_eq!(base_identifier("golang.org/x/text@v0.3.0"), "golang.org/x/text");
        assert_eq!(base_identifier("example.com/app"), "example.com/app");
    }

    #[test]
    fn base_identifier_keeps_scoped_names() {
        assert_eq!(base_identifier("@scope/pkg"), "@scope/pkg");
        assert_eq!(base_identifier("@scope/pkg@1.0.0"), "@scope/pkg");
    }

    #[test]
    fn base_identifier_only_strips_last_suffix() {
        assert_eq!(base_identifier("a@b@c"), "a@b");
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = NodeFilter::new();
        assert!(filter.is_empty());
        assert!(!filter.matches("A"));
    }

    #[test]
    fn exact_filter_requires_full_name() {
        let filter = NodeFilter::new().with_exact(["golang.org/x/text@v0.3.0"]);
        assert!(filter.matches("golang.org/x/text@v0.3.0"));
        assert!(!filter.matches("golang.org/x/text@v0.3.7"));
        assert!(!filter.matches("golang.org/x/text"));
    }

    #[test]
    fn no_version_filter_ignores_suffix() {
        let filter = NodeFilter::new().with_no_version(["golang.org/x/text"]);
        assert!(filter.matches("golang.org/x/text@v0.3.0"));
        assert!(filter.matches("golang.org/x/text@v0.3.7"));
        assert!(filter.matches("golang.org/x/text"));
        assert!(!filter.matches("golang.org/x/tools@v0.1.0"));
    }

    #[test]
    fn no_version_filter_normalizes_its_own_input() {
        let filter = NodeFilter::new().with_no_version(["golang.org/x/text@v0.3.0"]);
        assert!(filter.matches("golang.org/x/text@v0.9.9"));
    }

    #[test]
    fn filters_combine_as_union() {
        let filter = NodeFilter::new()
            .with_exact(["A"])
            .with_no_version(["B"]);
        assert!(filter.matches("A"));
        assert!(filter.matches("B@v1"));
        assert!(!filter.matches("A@v1"));
    }

    #[test]
    fn display_lists_both_kinds() {
        let filter = NodeFilter::new()
            .with_exact(["A@v1"])
            .with_no_version(["B"]);
        assert_eq!(filter.to_string(), "[A@v1, B@*]");
    }
}
