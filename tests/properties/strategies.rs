//! Shared generators for edge lists.

use proptest::prelude::*;

use gmtree::Edge;

/// Module-like identifier drawn from a small pool so names collide often
pub fn module_name() -> impl Strategy<Value = String> {
    (0u8..12, proptest::option::of(0u8..3)).prop_map(|(module, version)| match version {
        Some(version) => format!("m{module}@v{version}"),
        None => format!("m{module}"),
    })
}

/// Arbitrary edge list, possibly with repeats, cycles and fragments
pub fn edge_list() -> impl Strategy<Value = Vec<Edge>> {
    proptest::collection::vec((module_name(), module_name()), 1..40)
        .prop_map(|pairs| pairs.into_iter().map(|(p, c)| Edge::new(p, c)).collect())
}

/// Edge list shaped like a real tree: every child name is fresh and every
/// parent has already been placed
pub fn tree_edge_list() -> impl Strategy<Value = Vec<Edge>> {
    proptest::collection::vec(any::<prop::sample::Index>(), 1..40).prop_map(|picks| {
        let mut names = vec!["root".to_string()];
        let mut edges = Vec::new();
        for (i, pick) in picks.into_iter().enumerate() {
            let parent = names[pick.index(names.len())].clone();
            let child = format!("n{i}");
            edges.push(Edge::new(parent, child.clone()));
            names.push(child);
        }
        edges
    })
}
