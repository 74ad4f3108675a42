//! Tree construction from dependency edges.
//!
//! The first edge names the root. Every later edge resolves both of its
//! names through the tree's name lookup, creating unparented nodes for
//! names not seen yet, and appends the child under the parent.
//!
//! A name that is already attached somewhere is never moved. The builder
//! forks a fresh node with the same name instead, so a module required
//! along several paths shows up at every one of them. Forked nodes are not
//! registered: later edges keep resolving the name to its first node.
//!
//! Cycles are cut the same way. A name is also forked when attaching its
//! first node would make that node its own ancestor, even if the node is
//! still parentless. This goes beyond a plain "already has a parent" rule:
//! for `A B`, `X Y`, `Y X`, `B X` it draws `A`, `B`, `X`, `Y`, `X`, where
//! the plain rule would link `X` and `Y` into a loop and draw `X` as a leaf
//! under `B`.

use tracing::{debug, trace, warn};

use crate::domain::entities::{DependencyTree, NodeId};
use crate::domain::value_objects::Edge;
use crate::error::{TreeError, TreeResult};

/// Incremental tree builder
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: Option<DependencyTree>,
    edges: usize,
    forks: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges consumed so far
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of nodes created because their name was already attached
    pub fn fork_count(&self) -> usize {
        self.forks
    }

    /// Consume one edge
    pub fn push(&mut self, edge: &Edge) {
        self.edges += 1;
        if let Some(tree) = self.tree.as_mut() {
            if Self::attach(tree, edge) {
                self.forks += 1;
            }
        } else {
            self.tree = Some(Self::start(edge));
        }
    }

    /// Finish building.
    ///
    /// # Errors
    ///
    /// Returns `EmptyGraph` if no edge was pushed.
    pub fn finish(self) -> TreeResult<DependencyTree> {
        let tree = self.tree.ok_or(TreeError::EmptyGraph)?;

        let fragments = tree.fragments();
        if !fragments.is_empty() {
            let names: Vec<&str> = fragments.iter().map(|&id| tree.name(id)).collect();
            warn!(
                count = fragments.len(),
                fragments = ?names,
                "some modules never appear as a dependency and are not reachable from the root"
            );
        }

        debug!(
            edges = self.edges,
            nodes = tree.arena_len(),
            forks = self.forks,
            root = tree.name(tree.root()),
            "built dependency tree"
        );
        Ok(tree)
    }

    fn start(edge: &Edge) -> DependencyTree {
        let mut tree = DependencyTree::with_root(edge.parent.as_str());
        let root = tree.root();
        let child = tree.add_node(edge.child.as_str());
        tree.append_child(root, child);
        tree.register(&edge.child, child);
        trace!(root = %edge.parent, child = %edge.child, "root edge");
        tree
    }

    /// Attach one edge; returns true if the child had to be forked
    fn attach(tree: &mut DependencyTree, edge: &Edge) -> bool {
        let child = Self::resolve(tree, &edge.child);
        let parent = Self::resolve(tree, &edge.parent);

        let forked = Self::is_placed(tree, child, parent);
        let child = if forked {
            debug!(name = %edge.child, under = %edge.parent, "module already placed, forking a new node");
            tree.add_node(edge.child.as_str())
        } else {
            child
        };

        tree.append_child(parent, child);
        forked
    }

    fn resolve(tree: &mut DependencyTree, name: &str) -> NodeId {
        match tree.lookup(name) {
            Some(id) => id,
            None => {
                let id = tree.add_node(name);
                tree.register(name, id);
                id
            }
        }
    }

    /// A node cannot be attached again if it already has a parent, is the
    /// root, or would become its own ancestor.
    fn is_placed(tree: &DependencyTree, child: NodeId, parent: NodeId) -> bool {
        let node = tree.node(child);
        if node.parent().is_some() || child == tree.root() || child == parent {
            return true;
        }
        // a leaf has no descendants, so it cannot be above `parent`
        !node.is_leaf() && tree.is_ancestor_or_self(child, parent)
    }
}

/// Build a tree from a complete edge list.
///
/// # Errors
///
/// Returns `EmptyGraph` if `edges` is empty.
pub fn build_tree<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> TreeResult<DependencyTree> {
    let mut builder = TreeBuilder::new();
    for edge in edges {
        builder.push(edge);
    }
    builder.finish()
}
