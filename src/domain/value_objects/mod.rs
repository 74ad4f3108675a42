//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.
//! - `Edge` - One `parent child` dependency pair
//! - `NodeFilter` - Keep-predicate used by the pruner
//! - `Charset` / `Glyphs` - Box-drawing characters used by the renderer

mod edge;
mod filter;
mod glyphs;

pub use edge::Edge;
pub use filter::{base_identifier, NodeFilter};
pub use glyphs::{Charset, Glyphs};
