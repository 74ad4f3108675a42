//! Output Rendering
//!
//! Writes a finished tree either as drawn text lines or as nested JSON.

use std::io::{self, Write};

use crate::application::TreeReport;
use crate::domain::entities::{DependencyTree, NodeId};
use crate::domain::services::RenderOptions;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Box-drawing tree, one line per node
    #[default]
    Text,
    /// Nested JSON for scripting
    Json,
}

/// Trait for writing a pipeline result
pub trait TreeWriter {
    fn write(&self, report: &TreeReport, out: &mut dyn Write) -> io::Result<()>;
}

/// Text writer: one rendered line per reachable node
pub struct TextOutput {
    options: RenderOptions,
}

impl TextOutput {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl TreeWriter for TextOutput {
    fn write(&self, report: &TreeReport, out: &mut dyn Write) -> io::Result<()> {
        for line in report.lines(&self.options) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Step of the JSON walk
enum JsonStep {
    Open(NodeId),
    Close,
}

/// JSON writer for the reachable tree.
///
/// Emits `{"name": ..., "children": [...]}` objects nested like the tree,
/// walking it with an explicit stack so depth is bounded only by memory.
pub struct JsonOutput;

impl JsonOutput {
    fn write_tree(tree: &DependencyTree, out: &mut dyn Write) -> io::Result<()> {
        let mut stack = vec![JsonStep::Open(tree.root())];

        while let Some(step) = stack.pop() {
            match step {
                JsonStep::Open(id) => {
                    let node = tree.node(id);
                    let follows_sibling = node
                        .parent()
                        .is_some_and(|parent| tree.node(parent).children().first() != Some(&id));
                    if follows_sibling {
                        out.write_all(b",")?;
                    }

                    out.write_all(b"{\"name\":")?;
                    serde_json::to_writer(&mut *out, node.name())?;
                    out.write_all(b",\"children\":[")?;

                    stack.push(JsonStep::Close);
                    stack.extend(node.children().iter().rev().map(|&child| JsonStep::Open(child)));
                }
                JsonStep::Close => out.write_all(b"]}")?,
            }
        }
        Ok(())
    }
}

impl TreeWriter for JsonOutput {
    fn write(&self, report: &TreeReport, out: &mut dyn Write) -> io::Result<()> {
        Self::write_tree(&report.tree, out)?;
        writeln!(out)
    }
}

/// Create a writer based on format
pub fn create_writer(format: OutputFormat, options: RenderOptions) -> Box<dyn TreeWriter> {
    match format {
        OutputFormat::Text => Box::new(TextOutput::new(options)),
        OutputFormat::Json => Box::new(JsonOutput),
    }
}
