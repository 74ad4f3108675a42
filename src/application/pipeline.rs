//! Tree pipeline
//!
//! Coordinates the full flow for one run:
//!
//! 1. Validate and parse the input lines into edges
//! 2. Build the dependency tree
//! 3. Prune it to the filter, if one is set
//! 4. Re-check the tree invariants after pruning
//!
//! Rendering is left to the caller, which picks the output format.

use tracing::debug;

use crate::config::Config;
use crate::domain::entities::DependencyTree;
use crate::domain::ports::LineSource;
use crate::domain::services::{prune, render_lines, PruneStats, RenderOptions, TreeBuilder, TreeLines};
use crate::domain::value_objects::NodeFilter;
use crate::error::TreeResult;
use crate::parser::parse_edges;

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct TreeReport {
    /// The built, possibly pruned, tree
    pub tree: DependencyTree,
    /// Number of edges read
    pub edges: usize,
    /// Nodes created because a name was already placed
    pub forks: usize,
    /// Names of parentless nodes that never became reachable from the root
    pub fragments: Vec<String>,
    /// Set when a filter ran
    pub prune: Option<PruneStats>,
}

impl TreeReport {
    /// Render the tree in this report
    pub fn lines<'a>(&'a self, options: &RenderOptions) -> TreeLines<'a> {
        render_lines(&self.tree, options)
    }
}

/// Validate → build → prune → verify
#[derive(Debug, Clone, Default)]
pub struct TreePipeline {
    filter: NodeFilter,
}

impl TreePipeline {
    /// Create a pipeline that does not prune
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline from the filter settings of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_filter(config.node_filter())
    }

    /// Prune to `filter` (an empty filter disables pruning)
    pub fn with_filter(mut self, filter: NodeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> &NodeFilter {
        &self.filter
    }

    /// Run on already materialized lines.
    ///
    /// # Errors
    ///
    /// `MalformedLine`, `EmptyGraph`, `NoMatch` or `CorruptTree`.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> TreeResult<TreeReport> {
        let edges = parse_edges(lines)?;

        let mut builder = TreeBuilder::new();
        for edge in &edges {
            builder.push(edge);
        }
        let forks = builder.fork_count();
        let mut tree = builder.finish()?;

        let fragments = tree
            .fragments()
            .into_iter()
            .map(|id| tree.name(id).to_string())
            .collect();

        let prune_stats = if self.filter.is_empty() {
            None
        } else {
            let filter = &self.filter;
            let stats = prune(&mut tree, |node| filter.matches(node.name()), &filter.to_string())?;
            tree.verify()?;
            Some(stats)
        };

        debug!(
            edges = edges.len(),
            forks,
            visible = tree.node_count(),
            pruned = prune_stats.is_some(),
            "pipeline finished"
        );

        Ok(TreeReport {
            tree,
            edges: edges.len(),
            forks,
            fragments,
            prune: prune_stats,
        })
    }

    /// Read every line from `source`, then run.
    pub fn run_source(&self, source: &mut dyn LineSource) -> TreeResult<TreeReport> {
        let lines = source.read_lines()?;
        debug!(source = %source.describe(), lines = lines.len(), "input read");
        self.run(&lines)
    }
}
