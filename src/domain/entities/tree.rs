//! Dependency tree entity
//!
//! All nodes live in one arena (`Vec<Node>`) owned by [`DependencyTree`] and
//! refer to each other through [`NodeId`] handles. `parent`, `children` and
//! `next_sibling` are index relations, so detaching a subtree only unlinks
//! it; the nodes themselves stay allocated until the tree is dropped.
//!
//! ## Identity
//!
//! The name lookup maps each name to the *first registered* node only. When
//! the same name is attached at a second position the builder forks a new
//! node that is deliberately not addressable by name. Same-named nodes are
//! distinct entities and are never merged.
//!
//! ## Invariants
//!
//! - every node except the root has at most one parent
//! - a child appears in `parent.children` exactly where its `next_sibling`
//!   chain says it does: `children[i].next_sibling == children.get(i + 1)`
//!
//! [`DependencyTree::verify`] checks both and reports `CorruptTree`.

use std::collections::HashMap;

use crate::error::{TreeError, TreeResult};

/// Stable handle to a node inside one [`DependencyTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One occurrence of a module identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    next_sibling: Option<NodeId>,
    keep: bool,
}

impl Node {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            keep: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in first-seen order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The sibling drawn right after this node, if any
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// Returns true if this node is drawn with the terminal connector
    pub fn is_last_sibling(&self) -> bool {
        self.next_sibling.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Keep mark left by the last prune mark pass
    pub fn is_kept(&self) -> bool {
        self.keep
    }
}

/// Rooted, ordered tree of module identifiers
#[derive(Debug, Clone)]
pub struct DependencyTree {
    nodes: Vec<Node>,
    root: NodeId,
    lookup: HashMap<String, NodeId>,
}

impl DependencyTree {
    /// Create a tree holding only a registered root node
    pub fn with_root(name: impl Into<String>) -> Self {
        let name = name.into();
        let root = NodeId(0);
        let mut lookup = HashMap::new();
        lookup.insert(name.clone(), root);
        Self {
            nodes: vec![Node::new(name)],
            root,
            lookup,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was handed out by a different tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Name of a node (shorthand for `node(id).name()`)
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    /// First node registered under `name`
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.lookup.get(name).copied()
    }

    /// Number of nodes ever allocated, including detached and unreachable ones
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes reachable from the root
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Depth-first, parent-before-children walk from the root
    pub fn preorder(&self) -> Preorder<'_> {
        self.preorder_from(self.root)
    }

    /// Depth-first walk of the subtree rooted at `start`
    pub fn preorder_from(&self, start: NodeId) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![start],
        }
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).parent,
        }
    }

    /// Number of strict ancestors (root is depth 0)
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Returns true if `candidate` is `id` itself or one of its ancestors
    pub fn is_ancestor_or_self(&self, candidate: NodeId, id: NodeId) -> bool {
        candidate == id || self.ancestors(id).any(|ancestor| ancestor == candidate)
    }

    /// Parentless nodes other than the root.
    ///
    /// After building these are fragments whose own parent edge never
    /// appeared; after pruning they also include detached subtrees.
    pub fn fragments(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
            .filter(|(id, node)| *id != self.root && node.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Allocate an unparented node without registering its name
    pub(crate) fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name));
        id
    }

    /// Point `name` at `id`, replacing any earlier mapping
    pub(crate) fn register(&mut self, name: &str, id: NodeId) {
        self.lookup.insert(name.to_string(), id);
    }

    /// Append `child` as the last child of `parent` and link the previous
    /// last child to it.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(&previous) = self.node(parent).children.last() {
            self.nodes[previous.0].next_sibling = Some(child);
        }

        let appended = &mut self.nodes[child.0];
        appended.parent = Some(parent);
        appended.next_sibling = None;

        self.nodes[parent.0].children.push(child);
    }

    /// Remove `child` from `parent.children`, pointing the preceding sibling
    /// past it. The detached subtree keeps its own links.
    pub(crate) fn detach_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        let position = self
            .node(parent)
            .children
            .iter()
            .position(|&candidate| candidate == child)
            .ok_or_else(|| self.corrupt(child, parent))?;

        let siblings = &mut self.nodes[parent.0].children;
        siblings.remove(position);
        let following = siblings.get(position).copied();
        let preceding = position
            .checked_sub(1)
            .and_then(|index| siblings.get(index).copied());

        if let Some(preceding) = preceding {
            self.nodes[preceding.0].next_sibling = following;
        }

        let detached = &mut self.nodes[child.0];
        detached.parent = None;
        detached.next_sibling = None;
        Ok(())
    }

    pub(crate) fn set_keep(&mut self, id: NodeId, keep: bool) {
        self.nodes[id.0].keep = keep;
    }

    /// Reset every keep mark to false
    pub(crate) fn clear_marks(&mut self) {
        for node in &mut self.nodes {
            node.keep = false;
        }
    }

    /// Check the parent/child/sibling invariants over the whole arena.
    ///
    /// # Errors
    ///
    /// Returns `CorruptTree` naming the first inconsistent node.
    pub fn verify(&self) -> TreeResult<()> {
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index);

            if let Some(parent) = node.parent {
                if !self.node(parent).children.contains(&id) {
                    return Err(self.corrupt(id, parent));
                }
            }

            for (position, &child) in node.children.iter().enumerate() {
                let linked = self.node(child);
                let expected_next = node.children.get(position + 1).copied();
                if linked.parent != Some(id) || linked.next_sibling != expected_next {
                    return Err(self.corrupt(child, id));
                }
            }
        }
        Ok(())
    }

    fn corrupt(&self, node: NodeId, parent: NodeId) -> TreeError {
        TreeError::CorruptTree {
            node: self.name(node).to_string(),
            parent: self.name(parent).to_string(),
        }
    }
}

/// Iterator returned by [`DependencyTree::preorder`]
pub struct Preorder<'a> {
    tree: &'a DependencyTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children.iter().rev().copied());
        Some(id)
    }
}

/// Iterator returned by [`DependencyTree::ancestors`]
pub struct Ancestors<'a> {
    tree: &'a DependencyTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.node(id).parent;
        Some(id)
    }
}
