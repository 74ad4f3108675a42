//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain tree rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TreePipeline` - Validate, build, prune and verify one dependency tree

pub mod pipeline;

pub use pipeline::{TreePipeline, TreeReport};
