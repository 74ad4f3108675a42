//! Edge value object - one dependency pair from the module graph

use std::fmt;

/// An ordered `(parent, child)` pair, one per input line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Requiring module (left token)
    pub parent: String,
    /// Required module (right token)
    pub child: String,
}

impl Edge {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parent, self.child)
    }
}
