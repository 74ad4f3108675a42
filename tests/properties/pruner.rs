//! Property tests for pruning.

use std::collections::BTreeSet;

use proptest::prelude::*;

use gmtree::{build_tree, prune, DependencyTree, NodeFilter, NodeId, TreeError};

use super::strategies::{edge_list, module_name};

fn visible(tree: &DependencyTree) -> BTreeSet<NodeId> {
    tree.preorder().collect()
}

/// Matches that are not below another match, plus all their ancestors
fn expected_keep_set(tree: &DependencyTree, filter: &NodeFilter) -> BTreeSet<NodeId> {
    let matches = |id: NodeId| filter.matches(tree.name(id));
    let mut keep = BTreeSet::new();
    for id in tree.preorder() {
        if matches(id) && !tree.ancestors(id).any(matches) {
            keep.insert(id);
            keep.extend(tree.ancestors(id));
        }
    }
    keep
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Pruning keeps exactly the outermost matches and their ancestors.
    #[test]
    fn property_prune_keeps_minimal_set(
        edges in edge_list(),
        targets in proptest::collection::vec(module_name(), 1..4),
    ) {
        let mut tree = build_tree(&edges).unwrap();
        let filter = NodeFilter::new().with_no_version(targets);
        let expected = expected_keep_set(&tree, &filter);

        let result = prune(&mut tree, |node| filter.matches(node.name()), &filter.to_string());

        if expected.is_empty() {
            prop_assert!(matches!(result, Err(TreeError::NoMatch { .. })), "expected TreeError::NoMatch");
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(visible(&tree), expected);
            prop_assert!(tree.verify().is_ok());
        }
    }

    /// PROPERTY: Surviving siblings keep their relative order.
    #[test]
    fn property_prune_preserves_sibling_order(
        edges in edge_list(),
        target in module_name(),
    ) {
        let mut tree = build_tree(&edges).unwrap();
        let before: Vec<NodeId> = tree.preorder().collect();
        let filter = NodeFilter::new().with_exact([target]);

        if prune(&mut tree, |node| filter.matches(node.name()), &filter.to_string()).is_ok() {
            let after: Vec<NodeId> = tree.preorder().collect();
            let filtered: Vec<NodeId> = before.into_iter().filter(|id| after.contains(id)).collect();
            prop_assert_eq!(after, filtered);
        }
    }

    /// PROPERTY: A failed prune leaves the tree as it was.
    #[test]
    fn property_no_match_leaves_tree_unchanged(edges in edge_list()) {
        let mut tree = build_tree(&edges).unwrap();
        let before: Vec<NodeId> = tree.preorder().collect();

        let result = prune(&mut tree, |node| node.name() == "absent", "[absent]");

        prop_assert!(matches!(result, Err(TreeError::NoMatch { .. })), "expected TreeError::NoMatch");
        prop_assert_eq!(tree.preorder().collect::<Vec<_>>(), before);
    }
}
