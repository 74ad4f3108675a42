//! Mark-and-sweep pruning.
//!
//! The mark pass walks the tree depth-first. A node satisfying the
//! predicate is marked together with its ancestor chain, and the walk does
//! not descend below it. The sweep pass then detaches every unmarked child
//! of a marked node, so what remains is exactly the matches plus the paths
//! leading to them, in their original sibling order.
//!
//! `NoMatch` is decided between the two passes. Marking only touches keep
//! flags, so a failed prune leaves the tree structurally unchanged.

use tracing::debug;

use crate::domain::entities::{DependencyTree, Node, NodeId};
use crate::error::{TreeError, TreeResult};

/// Counters reported by one prune run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Nodes that satisfied the predicate during marking
    pub matched: usize,
    /// Nodes left reachable after the sweep
    pub kept: usize,
    /// Subtrees detached by the sweep
    pub detached: usize,
}

/// Prune `tree` in place to the nodes satisfying `keep` plus their ancestors.
///
/// `describe` is only used to label a `NoMatch` failure.
///
/// # Errors
///
/// Returns `NoMatch` if `keep` holds for no reachable node, and
/// `CorruptTree` if a sibling link is found broken during the sweep.
pub fn prune<F>(tree: &mut DependencyTree, keep: F, describe: &str) -> TreeResult<PruneStats>
where
    F: Fn(&Node) -> bool,
{
    tree.clear_marks();

    let matched = mark(tree, &keep);
    let root = tree.root();
    if !tree.node(root).is_kept() {
        tree.clear_marks();
        return Err(TreeError::NoMatch {
            filter: describe.to_string(),
        });
    }

    let (kept, detached) = sweep(tree, root)?;
    let stats = PruneStats {
        matched,
        kept,
        detached,
    };
    debug!(
        matched = stats.matched,
        kept = stats.kept,
        detached = stats.detached,
        "pruned tree"
    );
    Ok(stats)
}

/// Mark matches and their ancestors; returns the number of matches
fn mark<F>(tree: &mut DependencyTree, keep: &F) -> usize
where
    F: Fn(&Node) -> bool,
{
    let mut matched = 0;
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        if keep(tree.node(id)) {
            matched += 1;
            mark_path(tree, id);
            continue;
        }
        stack.extend(tree.node(id).children().iter().rev().copied());
    }

    matched
}

/// Mark `id` and walk up until an already marked ancestor is reached
fn mark_path(tree: &mut DependencyTree, id: NodeId) {
    tree.set_keep(id, true);
    let mut current = tree.node(id).parent();
    while let Some(ancestor) = current {
        if tree.node(ancestor).is_kept() {
            break;
        }
        tree.set_keep(ancestor, true);
        current = tree.node(ancestor).parent();
    }
}

/// Detach unmarked children below marked nodes; returns (kept, detached)
fn sweep(tree: &mut DependencyTree, root: NodeId) -> TreeResult<(usize, usize)> {
    let mut kept = 0;
    let mut detached = 0;
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        kept += 1;

        let children = tree.node(id).children().to_vec();
        for child in children {
            if tree.node(child).is_kept() {
                stack.push(child);
            } else {
                tree.detach_child(id, child)?;
                detached += 1;
            }
        }
    }

    Ok((kept, detached))
}
