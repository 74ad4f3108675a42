//! Property tests for tree construction.

use proptest::prelude::*;

use gmtree::{build_tree, parse_edges};

use super::strategies::{edge_list, tree_edge_list};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N edges with distinct children build a tree of N + 1 nodes.
    #[test]
    fn property_tree_edges_build_n_plus_one_nodes(edges in tree_edge_list()) {
        let tree = build_tree(&edges).unwrap();
        prop_assert_eq!(tree.node_count(), edges.len() + 1);
        prop_assert!(tree.fragments().is_empty());
    }

    /// PROPERTY: Arbitrary edge lists always build a consistent tree.
    #[test]
    fn property_arbitrary_edges_keep_invariants(edges in edge_list()) {
        let tree = build_tree(&edges).unwrap();
        prop_assert!(tree.verify().is_ok());
        prop_assert_eq!(tree.name(tree.root()), edges[0].parent.as_str());
        prop_assert!(tree.node_count() <= tree.arena_len());
    }

    /// PROPERTY: Every edge becomes exactly one parent/child link.
    #[test]
    fn property_each_edge_adds_one_link(edges in edge_list()) {
        let tree = build_tree(&edges).unwrap();
        let starts = std::iter::once(tree.root()).chain(tree.fragments());
        let links: usize = starts
            .flat_map(|start| tree.preorder_from(start))
            .map(|id| tree.node(id).children().len())
            .sum();
        prop_assert_eq!(links, edges.len());
    }

    /// PROPERTY: The parser never panics on arbitrary text.
    #[test]
    fn property_parse_edges_never_panics(lines in proptest::collection::vec(".{0,40}", 0..8)) {
        let _ = parse_edges(&lines);
    }
}
