//! Property tests for rendering.

use proptest::prelude::*;

use gmtree::{build_tree, render_lines, Charset, RenderOptions};

use super::strategies::{edge_list, tree_edge_list};

/// Connector glyph of a non-root line: the first branch or corner character
fn connector(line: &str) -> Option<char> {
    line.chars().find(|c| matches!(c, '├' | '└'))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One line per reachable node.
    #[test]
    fn property_one_line_per_node(edges in edge_list(), indent in 0usize..6) {
        let tree = build_tree(&edges).unwrap();
        let options = RenderOptions::new(indent, Charset::Unicode);
        prop_assert_eq!(render_lines(&tree, &options).count(), tree.node_count());
    }

    /// PROPERTY: N tree-shaped edges render as N + 1 lines.
    #[test]
    fn property_tree_edges_render_n_plus_one_lines(edges in tree_edge_list()) {
        let tree = build_tree(&edges).unwrap();
        prop_assert_eq!(render_lines(&tree, &RenderOptions::default()).count(), edges.len() + 1);
    }

    /// PROPERTY: Every line ends with its node's name, root line starts with a space.
    #[test]
    fn property_lines_end_with_names(edges in edge_list()) {
        let tree = build_tree(&edges).unwrap();
        let lines: Vec<String> = render_lines(&tree, &RenderOptions::default()).collect();

        prop_assert_eq!(&lines[0], &format!(" {}", tree.name(tree.root())));
        for (line, id) in lines.iter().zip(tree.preorder()) {
            let suffix = format!(" {}", tree.name(id));
            prop_assert!(line.ends_with(&suffix));
        }
    }

    /// PROPERTY: Growing the indent by k lengthens each non-root line's
    /// drawing by k per level and never changes the connector.
    #[test]
    fn property_indent_monotonicity(edges in edge_list(), indent in 0usize..4, k in 1usize..4) {
        let tree = build_tree(&edges).unwrap();
        let narrow: Vec<String> =
            render_lines(&tree, &RenderOptions::new(indent, Charset::Unicode)).collect();
        let wide: Vec<String> =
            render_lines(&tree, &RenderOptions::new(indent + k, Charset::Unicode)).collect();

        prop_assert_eq!(&narrow[0], &wide[0]);
        for ((narrow, wide), id) in narrow.iter().zip(&wide).zip(tree.preorder()).skip(1) {
            let depth = tree.depth(id);
            prop_assert_eq!(connector(narrow), connector(wide));
            prop_assert_eq!(
                wide.chars().count(),
                narrow.chars().count() + k * depth
            );
        }
    }
}
