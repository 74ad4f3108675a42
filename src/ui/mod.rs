//! Terminal-facing helpers for the binary

pub mod error;
pub mod json;
