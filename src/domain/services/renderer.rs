//! Tree renderer
//!
//! Produces one line per reachable node in pre-order. Lines are built on
//! demand by [`TreeLines`], which carries each pending node together with
//! the continuation prefix inherited from its ancestors, so no line ever
//! re-walks the ancestor chain.

use crate::domain::entities::{DependencyTree, NodeId};
use crate::domain::value_objects::{Charset, Glyphs};

/// Default width of the horizontal fill and of each continuation column
pub const DEFAULT_INDENT: usize = 2;

/// Rendering parameters threaded into [`render_lines`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: usize,
    pub glyphs: Glyphs,
}

impl RenderOptions {
    pub fn new(indent: usize, charset: Charset) -> Self {
        Self {
            indent,
            glyphs: charset.glyphs(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            glyphs: Glyphs::default(),
        }
    }
}

/// Lazy pre-order line iterator returned by [`render_lines`]
pub struct TreeLines<'a> {
    tree: &'a DependencyTree,
    options: RenderOptions,
    stack: Vec<(NodeId, String)>,
}

impl TreeLines<'_> {
    fn line_for(&self, id: NodeId, prefix: &str) -> (String, String) {
        let node = self.tree.node(id);
        if id == self.tree.root() {
            return (format!(" {}", node.name()), String::new());
        }

        let glyphs = self.options.glyphs;
        let indent = self.options.indent;
        let last = node.is_last_sibling();

        let mut line = String::with_capacity(prefix.len() + indent * 3 + node.name().len() + 4);
        line.push_str(prefix);
        line.push(if last { glyphs.corner } else { glyphs.branch });
        line.extend(std::iter::repeat(glyphs.horizontal).take(indent));
        line.push(' ');
        line.push_str(node.name());

        let mut child_prefix = String::with_capacity(prefix.len() + indent + 3);
        child_prefix.push_str(prefix);
        if last {
            child_prefix.extend(std::iter::repeat(' ').take(indent + 1));
        } else {
            child_prefix.push(glyphs.vertical);
            child_prefix.extend(std::iter::repeat(' ').take(indent));
        }

        (line, child_prefix)
    }
}

impl Iterator for TreeLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, prefix) = self.stack.pop()?;
        let (line, child_prefix) = self.line_for(id, &prefix);

        for &child in self.tree.node(id).children().iter().rev() {
            self.stack.push((child, child_prefix.clone()));
        }
        Some(line)
    }
}

/// Render `tree` from its root.
///
/// ```
/// use gmtree::domain::services::{build_tree, render_lines, RenderOptions};
/// use gmtree::domain::value_objects::Edge;
///
/// let edges = [Edge::new("A", "B"), Edge::new("A", "C"), Edge::new("B", "D")];
/// let tree = build_tree(&edges).unwrap();
/// let lines: Vec<String> = render_lines(&tree, &RenderOptions::default()).collect();
/// assert_eq!(lines, [" A", "├── B", "│  └── D", "└── C"]);
/// ```
pub fn render_lines<'a>(tree: &'a DependencyTree, options: &RenderOptions) -> TreeLines<'a> {
    TreeLines {
        tree,
        options: *options,
        stack: vec![(tree.root(), String::new())],
    }
}
