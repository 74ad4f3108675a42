//! Glyph sets for drawing tree connectors

use serde::{Deserialize, Serialize};

/// Which character set the renderer draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Box-drawing characters (`│ ─ ├ └`)
    #[default]
    Unicode,
    /// Plain ASCII, with a backtick as the corner connector
    Ascii,
}

impl Charset {
    /// Glyphs for this character set
    pub fn glyphs(self) -> Glyphs {
        match self {
            Charset::Unicode => Glyphs::unicode(),
            Charset::Ascii => Glyphs::ascii(),
        }
    }

    /// Parse a user-supplied name (config file, env var)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "unicode" | "utf8" | "utf-8" => Some(Charset::Unicode),
            "ascii" => Some(Charset::Ascii),
            _ => None,
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Charset::Unicode => write!(f, "unicode"),
            Charset::Ascii => write!(f, "ascii"),
        }
    }
}

/// Characters used to draw one tree line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Drawn in an ancestor column while that ancestor has later siblings
    pub vertical: char,
    /// Repeated `indent` times after a connector
    pub horizontal: char,
    /// Connector for a node followed by a sibling
    pub branch: char,
    /// Connector for the last child of its parent
    pub corner: char,
}

impl Glyphs {
    pub const fn unicode() -> Self {
        Self {
            vertical: '\u{2502}',
            horizontal: '\u{2500}',
            branch: '\u{251C}',
            corner: '\u{2514}',
        }
    }

    pub const fn ascii() -> Self {
        Self {
            vertical: '|',
            horizontal: '-',
            branch: '|',
            corner: '`',
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}
