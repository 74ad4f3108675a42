//! Domain Layer
//!
//! This is the core of gmtree - pure tree logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The arena-backed dependency tree
//! - `value_objects/` - Immutable value types (Edge, NodeFilter, Glyphs)
//! - `services/` - Tree algorithms (builder, pruner, renderer)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches stdin, files or the terminal
//! 2. **Explicit configuration** - Indent, glyphs and filters are passed in
//! 3. **Ports & Adapters** - Line input goes through the `LineSource` port

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
