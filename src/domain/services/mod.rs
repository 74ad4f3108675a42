//! Domain Services
//!
//! Pure tree algorithms with no I/O dependencies:
//! - `builder` - Incremental tree construction from edges
//! - `pruner` - Mark-and-sweep pruning to a keep set
//! - `renderer` - Lazy line-by-line tree drawing

mod builder;
mod pruner;
mod renderer;

pub use builder::{build_tree, TreeBuilder};
pub use pruner::{prune, PruneStats};
pub use renderer::{render_lines, RenderOptions, TreeLines, DEFAULT_INDENT};
