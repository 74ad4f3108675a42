//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `DependencyTree` - Arena owning every node built from the edge list
//! - `Node` - One occurrence of a module identifier in the tree

mod tree;

pub use tree::{Ancestors, DependencyTree, Node, NodeId, Preorder};
