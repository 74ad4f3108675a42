//! gmtree - render `go mod graph` output as a tree
//!
//! Reads `parent child` dependency pairs, assembles them into a rooted tree
//! (forking a fresh node whenever a module is required along another path),
//! optionally prunes the tree down to the paths leading to chosen modules,
//! and draws it with box-drawing connectors.
//!
//! ```
//! use gmtree::application::TreePipeline;
//! use gmtree::domain::services::RenderOptions;
//!
//! let report = TreePipeline::new().run(&["A B", "A C", "B D"]).unwrap();
//! let lines: Vec<String> = report.lines(&RenderOptions::default()).collect();
//! assert_eq!(lines, [" A", "├── B", "│  └── D", "└── C"]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use application::{TreePipeline, TreeReport};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{DependencyTree, Node, NodeId};
pub use domain::services::{build_tree, prune, render_lines, PruneStats, RenderOptions};
pub use domain::value_objects::{Charset, Edge, NodeFilter};
pub use error::{TreeError, TreeResult};
pub use parser::{parse_edges, validate_lines};
