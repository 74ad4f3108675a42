//! Edge parser for module graph dumps
//!
//! Every input line must be exactly two whitespace-separated tokens,
//! `<parent> <child>`. Validation runs over the whole input before any
//! edge is produced, so a malformed line never yields partial output.

use crate::domain::value_objects::Edge;
use crate::error::{TreeError, TreeResult};

/// Split one line into its two tokens, or `None` if it has another shape
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(parent), Some(child), None) => Some((parent, child)),
        _ => None,
    }
}

fn malformed(line: &str, index: usize) -> TreeError {
    TreeError::MalformedLine {
        line: line.to_string(),
        line_number: index + 1,
    }
}

/// Check that every line has the `parent child` shape.
///
/// # Errors
///
/// Returns `MalformedLine` for the first offending line, with its
/// 1-based line number.
pub fn validate_lines<S: AsRef<str>>(lines: &[S]) -> TreeResult<()> {
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if split_pair(line).is_none() {
            return Err(malformed(line, index));
        }
    }
    Ok(())
}

/// Parse a single line.
///
/// `line_number` is 1-based and only used for the error.
pub fn parse_line(line: &str, line_number: usize) -> TreeResult<Edge> {
    split_pair(line)
        .map(|(parent, child)| Edge::new(parent, child))
        .ok_or_else(|| TreeError::MalformedLine {
            line: line.to_string(),
            line_number,
        })
}

/// Validate all lines, then turn them into edges in input order.
///
/// An empty slice yields an empty edge list; deciding whether that is an
/// error is up to the tree builder.
pub fn parse_edges<S: AsRef<str>>(lines: &[S]) -> TreeResult<Vec<Edge>> {
    validate_lines(lines)?;
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| parse_line(line.as_ref(), index + 1))
        .collect()
}
